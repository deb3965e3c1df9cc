use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::fs;

use crate::config::DatabaseConfig;
use crate::error::{Result, SchemaError};

/// Establish a SeaORM database connection.
pub async fn establish_connection(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    // 1. Make sure the directory of a file-backed database exists
    if let Some(db_path) = config.db_path()? {
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    SchemaError::Config(format!("cannot create database directory: {}", e))
                })?;
            }
            log::info!("Creating database: {}", db_path.display());
        } else {
            log::info!("Using database: {}", db_path.display());
        }
    }

    // 2. Connection options. An in-memory database lives only as long as its
    //    connection, so the pool keeps exactly one open.
    let mut options = ConnectOptions::new(config.connection_string()?);
    let max_connections = if config.is_in_memory() {
        1
    } else {
        config.max_connections.max(1)
    };
    options
        .max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(config.connect_timeout())
        .sqlx_logging(config.sqlx_logging);
    log::debug!("Database connection string: {}", options.get_url());

    // 3. Connect
    let conn = Database::connect(options).await?;

    // 4. Cascading deletes depend on SQLite foreign key enforcement
    enable_foreign_keys(&conn).await?;

    Ok(conn)
}

pub(crate) async fn enable_foreign_keys<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    Ok(())
}

/// Close the database connection.
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
