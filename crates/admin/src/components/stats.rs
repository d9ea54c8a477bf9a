//! Derived dashboard statistics.

use rust_decimal::Decimal;

use crate::backend::types::Order;

/// Aggregate counters shown on the dashboard.
///
/// Derived, never persisted: recomputed from freshly fetched lists on every
/// dashboard render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Total products in the catalog.
    pub products: usize,
    /// Total orders ever placed.
    pub orders: usize,
    /// Sum of `amount` over paid orders.
    pub revenue: Decimal,
    /// Orders still awaiting payment.
    pub pending: usize,
    /// Registered users.
    pub users: u64,
}

impl DashboardStats {
    /// Compute statistics from already-resolved data.
    ///
    /// Pure and O(n) in the order count; an empty order list yields zero for
    /// every order-derived field.
    #[must_use]
    pub fn compute(orders: &[Order], product_count: usize, user_count: u64) -> Self {
        let revenue = orders
            .iter()
            .filter(|o| o.payment)
            .map(|o| o.amount)
            .sum();
        let pending = orders.iter().filter(|o| !o.payment).count();

        Self {
            products: product_count,
            orders: orders.len(),
            revenue,
            pending,
            users: user_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::types::{LineItem, Order, ShippingAddress};
    use cartwheel_core::{OrderId, OrderStatus};
    use chrono::{TimeZone, Utc};

    fn order(amount: i64, payment: bool) -> Order {
        Order {
            id: OrderId::new(format!("o-{amount}-{payment}")),
            address: ShippingAddress {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone: "0000000000".to_string(),
                street: "1 Analytical Way".to_string(),
                city: "London".to_string(),
                state: "London".to_string(),
                country: "UK".to_string(),
                zipcode: "E1 6AN".to_string(),
            },
            items: vec![LineItem {
                name: "Widget".to_string(),
                quantity: 1,
                price: Decimal::from(amount),
                image: vec![],
            }],
            amount: Decimal::from(amount),
            payment,
            payment_method: "COD".to_string(),
            status: OrderStatus::OrderPlaced,
            date: Utc.timestamp_millis_opt(1_717_332_000_000).unwrap(),
        }
    }

    #[test]
    fn test_empty_list_yields_zeroes() {
        let stats = DashboardStats::compute(&[], 0, 0);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_revenue_sums_paid_orders_only() {
        // One paid order of 100, one unpaid order of 50.
        let orders = vec![order(100, true), order(50, false)];
        let stats = DashboardStats::compute(&orders, 3, 12);

        assert_eq!(stats.revenue, Decimal::from(100));
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.orders, 2);
        assert_eq!(stats.products, 3);
        assert_eq!(stats.users, 12);
    }

    #[test]
    fn test_pending_counts_every_unpaid_order() {
        let orders = vec![order(10, false), order(20, false), order(30, true)];
        let stats = DashboardStats::compute(&orders, 0, 0);

        assert_eq!(stats.pending, 2);
        assert_eq!(stats.revenue, Decimal::from(30));
    }

    #[test]
    fn test_all_paid_means_no_pending() {
        let orders = vec![order(5, true), order(7, true)];
        let stats = DashboardStats::compute(&orders, 1, 1);

        assert_eq!(stats.pending, 0);
        assert_eq!(stats.revenue, Decimal::from(12));
    }
}
