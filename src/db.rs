use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;

/// Lazy pool: the server comes up even when the database is down,
/// and the health endpoint reports connectivity instead.
pub fn init_db(config: &Config) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy(&config.database_url)
        .expect("DATABASE_URL must be a valid MySQL URL")
}

/// One-shot connectivity check used by the startup self-test.
pub async fn ping(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query_scalar::<_, i64>("SELECT 1 AS test")
        .fetch_one(pool)
        .await?;
    Ok(())
}
