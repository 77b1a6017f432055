use sea_orm::DatabaseConnection;

use crate::realtime::broadcaster::Broadcaster;

/// Handles shared by every request handler: the store connection and the
/// realtime fan-out. Passed through axum's `State`, never held in globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub broadcaster: Broadcaster,
}
