use chrono::{DateTime, Utc};
use contracts::domain::order::aggregate::{Order, OrderId, OrderStatus, OrderType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::time_window::TimeWindow;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_type: String,
    pub customer_name: String,
    pub mobile: String,
    pub table_number: Option<String>,
    pub address: Option<String>,
    pub items: Json,
    pub total: f64,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let items = serde_json::from_value(m.items).unwrap_or_default();

        Order {
            id: OrderId::new(uuid),
            order_type: m.order_type.parse().unwrap_or(OrderType::DineIn),
            customer_name: m.customer_name,
            mobile: m.mobile,
            table_number: m.table_number,
            address: m.address,
            items,
            total: m.total,
            status: m.status.parse().unwrap_or(OrderStatus::Incoming),
            is_deleted: m.is_deleted,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, order: &Order) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(order.id.as_string()),
        order_type: Set(order.order_type.as_str().to_string()),
        customer_name: Set(order.customer_name.clone()),
        mobile: Set(order.mobile.clone()),
        table_number: Set(order.table_number.clone()),
        address: Set(order.address.clone()),
        items: Set(serde_json::to_value(&order.items).unwrap_or_default()),
        total: Set(order.total),
        status: Set(order.status.as_str().to_string()),
        is_deleted: Set(order.is_deleted),
        created_at: Set(order.created_at),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Order>, DbErr> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Orders whose `created_at` falls inside the window, soft-deleted ones
/// excluded, oldest first.
pub async fn list_in_window(
    db: &DatabaseConnection,
    window: &TimeWindow,
) -> Result<Vec<Order>, DbErr> {
    let mut query = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::CreatedAt.gte(window.start));
    query = if window.end_inclusive {
        query.filter(Column::CreatedAt.lte(window.end))
    } else {
        query.filter(Column::CreatedAt.lt(window.end))
    };

    let mut items: Vec<Order> = query.all(db).await?.into_iter().map(Into::into).collect();
    items.sort_by_key(|o| o.created_at);
    Ok(items)
}

/// Persist a status mutation (or the soft-delete flag). Everything else on
/// the record is immutable after creation.
pub async fn save_status(db: &DatabaseConnection, order: &Order) -> Result<(), DbErr> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::Status, Expr::value(order.status.as_str()))
        .col_expr(Column::IsDeleted, Expr::value(order.is_deleted))
        .filter(Column::Id.eq(order.id.as_string()))
        .exec(db)
        .await?;
    Ok(())
}

/// Physically remove orders older than the retention cutoff, soft-deleted
/// or not.
pub async fn purge_expired(
    db: &DatabaseConnection,
    cutoff: DateTime<Utc>,
) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::CreatedAt.lt(cutoff))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
