use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// Open the SQLite store and make sure the schema exists.
///
/// Returns the connection for the caller to hand to `AppState`; nothing is
/// kept in a process-wide global.
pub async fn initialize_database(db_path: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    let check_orders_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='orders';
    "#;
    let orders_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_orders_table.to_string(),
        ))
        .await?;

    if orders_table_exists.is_empty() {
        tracing::info!("Creating orders table");
        let create_orders_table_sql = r#"
            CREATE TABLE orders (
                id TEXT PRIMARY KEY NOT NULL,
                order_type TEXT NOT NULL,
                customer_name TEXT NOT NULL DEFAULT '',
                mobile TEXT NOT NULL DEFAULT '',
                table_number TEXT,
                address TEXT,
                items TEXT NOT NULL DEFAULT '[]',
                total REAL NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'incoming',
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_orders_table_sql.to_string(),
        ))
        .await?;
    }

    // Day listings, dashboard windows and the expiry sweep all range-scan
    // on created_at.
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders (created_at);".to_string(),
    ))
    .await?;

    Ok(conn)
}
