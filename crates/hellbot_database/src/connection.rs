//! Database connection utilities.

use crate::DatabaseConfig;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use hellbot_error::{StorageError, StorageErrorKind, StorageResult};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const MEMORY_PATH: &str = ":memory:";

/// Open the SQLite database described by `config` and bring its schema up
/// to date.
///
/// Parent directories of a file database are created as needed. File
/// databases use the WAL journal so readers do not block the writer.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the database cannot
/// be opened, or a migration fails.
#[instrument(skip(config), fields(path = %config.path()))]
pub fn establish_connection(config: &DatabaseConfig) -> StorageResult<SqliteConnection> {
    let path = config.path().as_str();
    if path == MEMORY_PATH {
        return establish_in_memory();
    }

    if let Some(parent) = Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            StorageError::new(StorageErrorKind::Connection(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let mut conn = SqliteConnection::establish(path)?;
    conn.batch_execute(&format!(
        "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
        config.busy_timeout_ms()
    ))
    .map_err(|e| StorageError::new(StorageErrorKind::Connection(e.to_string())))?;
    run_migrations(&mut conn)?;

    info!("Opened order cache database");
    Ok(conn)
}

/// Open a private in-memory database with the schema applied.
///
/// # Errors
///
/// Returns an error if SQLite cannot be opened or a migration fails.
pub fn establish_in_memory() -> StorageResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(MEMORY_PATH)?;
    run_migrations(&mut conn)?;
    debug!("Opened in-memory order cache database");
    Ok(conn)
}

/// Apply every pending embedded migration.
///
/// # Errors
///
/// Returns [`StorageErrorKind::Migration`] if a migration fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> StorageResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::new(StorageErrorKind::Migration(e.to_string())))?;
    if !applied.is_empty() {
        debug!(count = applied.len(), "Applied migrations");
    }
    Ok(())
}
