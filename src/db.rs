//! Shared `PostgreSQL` plumbing: the pooled client, the embedded schema, and
//! the helper that moves synchronous Diesel calls off the async executor.

use crate::config::DatabaseConfig;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by every repository adapter.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema for the `profiles`, `internships`, `applications`, and `tasks`
/// tables.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-01-000000_create_marketplace_tables/up.sql");

/// Errors raised by the shared database plumbing.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Building the pool or checking out a connection failed.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    /// A statement failed.
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// The blocking worker panicked or was cancelled.
    #[error("blocking database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds the process-wide connection pool.
///
/// # Errors
///
/// Returns [`DatabaseError::Pool`] when the pool cannot establish its
/// initial connections.
pub fn build_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Ok(Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(config.connection_timeout())
        .build(manager)?)
}

/// Applies [`SCHEMA_SQL`] to the pooled database.
///
/// # Errors
///
/// Returns [`DatabaseError`] when a connection cannot be obtained or the
/// schema statements fail.
pub async fn apply_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    run_blocking(
        pool,
        |connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(DatabaseError::from)
        },
        |err| err,
    )
    .await
}

/// Verifies the database answers a trivial query.
///
/// # Errors
///
/// Returns [`DatabaseError`] when the database is unreachable.
pub async fn ping(pool: &PgPool) -> Result<(), DatabaseError> {
    run_blocking(
        pool,
        |connection| {
            connection
                .batch_execute("SELECT 1")
                .map_err(DatabaseError::from)
        },
        |err| err,
    )
    .await
}

/// Runs a blocking database operation on a dedicated thread pool.
///
/// Pool checkout and join failures are converted through `wrap` so each
/// adapter reports them in its own error type.
pub(crate) async fn run_blocking<F, T, E>(
    pool: &PgPool,
    operation: F,
    wrap: fn(DatabaseError) -> E,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(|err| wrap(DatabaseError::Pool(err)))?;
        operation(&mut connection)
    })
    .await
    .map_err(|err| wrap(DatabaseError::Join(err)))?
}
