//! Free-text filtering over fetched entity lists.
//!
//! Matching is case-insensitive substring containment, not tokenized or
//! fuzzy. Filtering never reorders: relative order of the surviving items is
//! exactly their order in the input.

use crate::backend::types::{Order, User};

/// Filter `items` down to those matching `query`.
///
/// An empty (or whitespace-only) query is the identity and returns the list
/// unchanged. The query is lowercased once; `matches` receives each item and
/// the lowercased query.
#[must_use]
pub fn filter<T>(items: Vec<T>, query: &str, matches: impl Fn(&T, &str) -> bool) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }

    items.into_iter().filter(|i| matches(i, &query)).collect()
}

/// Order search predicate: customer name, phone, status label, or payment
/// method contains the query.
#[must_use]
pub fn order_matches(order: &Order, query: &str) -> bool {
    order.customer_name().to_lowercase().contains(query)
        || order.address.phone.contains(query)
        || order.status.label().to_lowercase().contains(query)
        || order.payment_method.to_lowercase().contains(query)
}

/// User search predicate: name or email contains the query.
#[must_use]
pub fn user_matches(user: &User, query: &str) -> bool {
    user.name.to_lowercase().contains(query) || user.email.to_lowercase().contains(query)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cartwheel_core::{OrderId, OrderStatus, UserId};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::backend::types::ShippingAddress;

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    fn order(first: &str, last: &str, phone: &str, method: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(format!("{first}-{last}")),
            address: ShippingAddress {
                first_name: first.to_string(),
                last_name: last.to_string(),
                phone: phone.to_string(),
                street: "street".to_string(),
                city: "city".to_string(),
                state: "state".to_string(),
                country: "country".to_string(),
                zipcode: "00000".to_string(),
            },
            items: vec![],
            amount: Decimal::from(10),
            payment: true,
            payment_method: method.to_string(),
            status,
            date: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let users = vec![user("1", "John Doe", "john@example.com")];
        let filtered = filter(users.clone(), "", user_matches);
        assert_eq!(filtered.len(), users.len());

        let filtered = filter(users, "   ", user_matches);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_user_search_is_case_insensitive() {
        let users = vec![
            user("1", "John Doe", "john@example.com"),
            user("2", "Jane", "jane@example.com"),
        ];
        let filtered = filter(users, "JOHN", user_matches);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().map(|u| u.name.as_str()), Some("John Doe"));
    }

    #[test]
    fn test_user_search_matches_email() {
        let users = vec![
            user("1", "John Doe", "john@example.com"),
            user("2", "Jane", "jane@other.net"),
        ];
        let filtered = filter(users, "other.net", user_matches);
        assert_eq!(filtered.first().map(|u| u.name.as_str()), Some("Jane"));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let users = vec![
            user("1", "John Doe", "john@example.com"),
            user("2", "Johnny B", "jb@example.com"),
            user("3", "Jane", "jane@example.com"),
        ];
        let once = filter(users, "john", user_matches);
        let names: Vec<String> = once.iter().map(|u| u.name.clone()).collect();
        let twice = filter(once, "john", user_matches);
        let names_twice: Vec<String> = twice.iter().map(|u| u.name.clone()).collect();
        assert_eq!(names, names_twice);
    }

    #[test]
    fn test_filtering_preserves_relative_order() {
        let users = vec![
            user("1", "John A", "a@example.com"),
            user("2", "Jane", "jane@example.com"),
            user("3", "John Z", "z@example.com"),
        ];
        let filtered = filter(users, "john", user_matches);
        let names: Vec<&str> = filtered.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["John A", "John Z"]);
    }

    #[test]
    fn test_order_search_spans_name_phone_status_method() {
        let orders = vec![
            order("Priya", "Sharma", "9876543210", "Stripe", OrderStatus::Packing),
            order("Liam", "Chen", "5550001111", "COD", OrderStatus::Delivered),
        ];

        let by_name = filter(orders.clone(), "priya sh", order_matches);
        assert_eq!(by_name.len(), 1);

        let by_phone = filter(orders.clone(), "555000", order_matches);
        assert_eq!(by_phone.first().map(|o| o.payment_method.as_str()), Some("COD"));

        let by_status = filter(orders.clone(), "delivered", order_matches);
        assert_eq!(by_status.len(), 1);

        let by_method = filter(orders, "stripe", order_matches);
        assert_eq!(by_method.len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let orders = vec![order("Priya", "Sharma", "98765", "Stripe", OrderStatus::Packing)];
        assert!(filter(orders, "zzz", order_matches).is_empty());
    }
}
