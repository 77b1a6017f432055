use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::domain::order::repository;

/// Orders are kept for 90 days from creation, soft-deleted or not.
pub const RETENTION_SECONDS: i64 = 7_776_000;

const SWEEP_INTERVAL_SECONDS: u64 = 3600;

/// Background worker that removes orders past the retention period,
/// standing in for a store-level TTL index.
pub struct ExpiryWorker {
    db: DatabaseConnection,
}

impl ExpiryWorker {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn run_loop(self) {
        info!(
            "order expiry worker started, sweeping every {} seconds",
            SWEEP_INTERVAL_SECONDS
        );
        let mut interval = time::interval(time::Duration::from_secs(SWEEP_INTERVAL_SECONDS));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            match repository::purge_expired(&self.db, cutoff(Utc::now())).await {
                Ok(0) => {}
                Ok(purged) => info!("expired {} order(s) past retention", purged),
                Err(e) => error!("order expiry sweep failed: {}", e),
            }
        }
    }
}

/// Everything created before this instant is eligible for removal.
pub fn cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::seconds(RETENTION_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_ninety_days() {
        let now: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        assert_eq!(cutoff(now), "2024-03-03T12:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }
}
