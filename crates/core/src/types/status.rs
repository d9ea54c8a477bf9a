//! Order fulfillment status enumeration.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// The storefront backend stores and returns the human-readable labels
/// verbatim ("Order Placed", "Out for delivery", ...), so serde round-trips
/// those exact strings. The variants are declared in fulfillment order; no
/// other value is valid for display or transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Order Placed")]
    OrderPlaced,
    #[serde(rename = "Packing")]
    Packing,
    #[serde(rename = "Shipped")]
    Shipped,
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
}

/// Error returned when parsing an unknown status label.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct OrderStatusError(String);

impl OrderStatus {
    /// All statuses in fulfillment order, for rendering selection controls.
    pub const ALL: [Self; 5] = [
        Self::OrderPlaced,
        Self::Packing,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// The backend wire label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrderPlaced => "Order Placed",
            Self::Packing => "Packing",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Order Placed" => Ok(Self::OrderPlaced),
            "Packing" => Ok(Self::Packing),
            "Shipped" => Ok(Self::Shipped),
            "Out for delivery" => Ok(Self::OutForDelivery),
            "Delivered" => Ok(Self::Delivered),
            other => Err(OrderStatusError(other.to_string())),
        }
    }
}
