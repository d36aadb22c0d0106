use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the pool size is invalid,
/// the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;

    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = max_connections {
        config = config.with_max_connections(max);
    }
    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!(path = %migrations_path, "database migrations applied");

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> anyhow::Result<Option<u32>> {
    match raw {
        None => Ok(None),
        Some(value) => {
            let max = value
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {value}"))?;
            anyhow::ensure!(max > 0, "DATABASE_MAX_CONNECTIONS must be greater than zero");
            Ok(Some(max))
        }
    }
}
