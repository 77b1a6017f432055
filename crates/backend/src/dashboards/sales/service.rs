use contracts::dashboards::sales::{PeakHour, RepeatCustomer, SalesTotals, TopDish};
use sea_orm::DatabaseConnection;

use super::compute;
use crate::domain::order::repository;
use crate::domain::order::service::OrderError;
use crate::shared::time_window::{self, Period};

/// Revenue and order count for `period`+`date`, an explicit `from`/`to`
/// range, or today when nothing is given.
pub async fn sales_totals(
    db: &DatabaseConnection,
    period: Option<String>,
    date: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<SalesTotals, OrderError> {
    let window = time_window::resolve(
        from.as_deref(),
        to.as_deref(),
        date.as_deref(),
        period.as_deref(),
    )?;
    let orders = repository::list_in_window(db, &window).await?;
    Ok(compute::sales_totals(&orders))
}

/// Most ordered dish for a `date` or `from`/`to` range, default today.
pub async fn top_dish(
    db: &DatabaseConnection,
    date: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Option<TopDish>, OrderError> {
    let window = time_window::resolve(from.as_deref(), to.as_deref(), date.as_deref(), None)?;
    let orders = repository::list_in_window(db, &window).await?;
    Ok(compute::top_dish(&orders))
}

/// Customers with two or more orders, for a whole `month`, a `from`/`to`
/// range, or today; optionally restricted to a single customer name.
pub async fn repeat_customers(
    db: &DatabaseConnection,
    month: Option<String>,
    from: Option<String>,
    to: Option<String>,
    name: Option<String>,
) -> Result<Vec<RepeatCustomer>, OrderError> {
    let window = if let (Some(from), Some(to)) = (from.as_deref(), to.as_deref()) {
        time_window::from_range(from, to)?
    } else if let Some(month) = month.as_deref() {
        time_window::for_month(month)?
    } else {
        time_window::today()
    };
    let orders = repository::list_in_window(db, &window).await?;
    Ok(compute::repeat_customers(&orders, name.as_deref()))
}

/// Busiest hour of the given day. The date is required here.
pub async fn peak_hour(
    db: &DatabaseConnection,
    date: Option<String>,
) -> Result<Option<PeakHour>, OrderError> {
    let date = date.ok_or_else(|| OrderError::Invalid("date is required".to_string()))?;
    let window = time_window::for_date(&date, Period::Day)?;
    let orders = repository::list_in_window(db, &window).await?;
    Ok(compute::peak_hour(&orders))
}
