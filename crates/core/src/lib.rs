//! Shared types for the Cartwheel admin panel.
//!
//! This crate holds the domain vocabulary that every Cartwheel crate agrees
//! on: typed entity IDs, the order fulfillment status enumeration, and money
//! formatting. It performs no I/O.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::{
    OrderId, OrderStatus, OrderStatusError, ProductId, UserId, format_amount,
};
