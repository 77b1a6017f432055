//! Aggregation rules over a fetched slice of orders.
//!
//! The store only filters (time window + soft-delete exclusion); the
//! grouping and ranking below run in memory so they can be tested without a
//! database.

use std::collections::HashMap;

use contracts::dashboards::sales::{PeakHour, PeakHourKey, RepeatCustomer, SalesTotals, TopDish};
use contracts::domain::order::aggregate::Order;

use crate::shared::time_window;

/// Revenue sum and order count. Empty input is zeros, not an error.
pub fn sales_totals(orders: &[Order]) -> SalesTotals {
    SalesTotals {
        total: orders.iter().map(|o| o.total).sum(),
        count: orders.len() as u64,
    }
}

/// The dish with the highest summed quantity across all order lines.
/// Ties are broken arbitrarily.
pub fn top_dish(orders: &[Order]) -> Option<TopDish> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for order in orders {
        for item in &order.items {
            *counts.entry(item.name.as_str()).or_insert(0) += item.qty as u64;
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, qty)| *qty)
        .map(|(name, count)| TopDish {
            name: name.to_string(),
            count,
        })
}

/// Customers with two or more orders, most frequent first. An optional
/// name restricts the match to that single customer before grouping.
pub fn repeat_customers(orders: &[Order], name: Option<&str>) -> Vec<RepeatCustomer> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for order in orders {
        if let Some(name) = name {
            if order.customer_name != name {
                continue;
            }
        }
        *counts.entry(order.customer_name.as_str()).or_insert(0) += 1;
    }

    let mut repeats: Vec<RepeatCustomer> = counts
        .into_iter()
        .filter(|(_, orders)| *orders >= 2)
        .map(|(customer_name, orders)| RepeatCustomer {
            customer_name: customer_name.to_string(),
            orders,
        })
        .collect();
    repeats.sort_by(|a, b| b.orders.cmp(&a.orders));
    repeats
}

/// The local hour of day with the most orders. Ties are broken arbitrarily.
pub fn peak_hour(orders: &[Order]) -> Option<PeakHour> {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for order in orders {
        *counts
            .entry(time_window::local_hour(order.created_at))
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(hour, count)| PeakHour {
            key: PeakHourKey { hour },
            count,
        })
}
