use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Opens the single long-lived connection every request shares. Nothing on
/// top of it retries; a dropped connection surfaces as per-request errors.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await?;
    db.ping().await?;
    Ok(db)
}
