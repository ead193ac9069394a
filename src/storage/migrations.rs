// storage/migrations.rs
// Store schema migration management

use sqlx::{Pool, Sqlite};

/// Runs SQLx migrations located in the `migrations/` directory.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
