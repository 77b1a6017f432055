use serde::{Deserialize, Serialize};

/// Revenue and order count over a time window. An empty window yields
/// zeros, never an absent body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesTotals {
    pub total: f64,
    pub count: u64,
}

/// The single most-ordered dish in a window, by summed quantity.
///
/// The `_id` field name mirrors the payload the dashboard clients already
/// consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDish {
    #[serde(rename = "_id")]
    pub name: String,
    pub count: u64,
}

/// A customer who placed at least two orders in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatCustomer {
    #[serde(rename = "_id")]
    pub customer_name: String,
    pub orders: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHourKey {
    /// Hour of day, 0-23, at the restaurant's local offset.
    pub hour: u32,
}

/// The busiest hour of a day by order count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakHour {
    #[serde(rename = "_id")]
    pub key: PeakHourKey,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shapes() {
        let totals = serde_json::to_value(SalesTotals::default()).unwrap();
        assert_eq!(totals, serde_json::json!({"total": 0.0, "count": 0}));

        let repeat = serde_json::to_value(RepeatCustomer {
            customer_name: "Asha".to_string(),
            orders: 2,
        })
        .unwrap();
        assert_eq!(repeat, serde_json::json!({"_id": "Asha", "orders": 2}));

        let peak = serde_json::to_value(PeakHour {
            key: PeakHourKey { hour: 10 },
            count: 2,
        })
        .unwrap();
        assert_eq!(peak, serde_json::json!({"_id": {"hour": 10}, "count": 2}));
    }
}
