use contracts::domain::order::aggregate::{Order, OrderDraft, StatusPatch};
use contracts::realtime::OrderEvent;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use uuid::Uuid;

use super::repository;
use crate::realtime::broadcaster::Broadcaster;
use crate::shared::time_window::{self, Period, WindowError};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("store error: {0}")]
    Store(#[from] sea_orm::DbErr),
}

impl From<WindowError> for OrderError {
    fn from(e: WindowError) -> Self {
        OrderError::Invalid(e.to_string())
    }
}

/// Validate, persist and announce a new order. The total is computed here,
/// once, and never again.
pub async fn create(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    draft: OrderDraft,
) -> Result<Order, OrderError> {
    draft.validate().map_err(OrderError::Invalid)?;

    let order = Order::new_for_insert(draft);
    repository::insert(db, &order).await?;

    broadcaster.publish(OrderEvent::NewOrder(order.clone()));
    Ok(order)
}

/// Overwrite the status of an existing order, or flip its soft-delete flag
/// when the historical `"deleted"` sentinel comes in. No transition
/// validation; repeating the same update is a no-op write.
pub async fn update_status(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    id: &str,
    status: &str,
) -> Result<Order, OrderError> {
    let patch = StatusPatch::parse(status).map_err(OrderError::Invalid)?;
    // A malformed id cannot name a stored order.
    let uuid = Uuid::parse_str(id).map_err(|_| OrderError::NotFound)?;

    let mut order = repository::find_by_id(db, uuid)
        .await?
        .ok_or(OrderError::NotFound)?;

    match patch {
        StatusPatch::Set(status) => order.status = status,
        StatusPatch::SoftDelete => order.is_deleted = true,
    }
    repository::save_status(db, &order).await?;

    broadcaster.publish(OrderEvent::OrderUpdated(order.clone()));
    Ok(order)
}

/// Orders of a single local calendar day (default: today) for the kitchen
/// and front-desk displays.
pub async fn list_for_day(
    db: &DatabaseConnection,
    date: Option<&str>,
) -> Result<Vec<Order>, OrderError> {
    let window = match date {
        Some(date) => time_window::for_date(date, Period::Day)?,
        None => time_window::today(),
    };
    Ok(repository::list_in_window(db, &window).await?)
}
