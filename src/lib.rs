//! Persistent schema for an internship management application.
//!
//! Students, employers, internships, applications, reports, reviews and user
//! accounts as SeaORM entities, with the migrations that create their tables
//! and one repository per entity for CRUD access.
//!
//! ```no_run
//! # async fn demo() -> Result<(), intern_learning::SchemaError> {
//! use intern_learning::{DatabaseConfig, StudentsRepository};
//!
//! let db = intern_learning::open(&DatabaseConfig::default()).await?;
//! let students = StudentsRepository::find_all(&db).await?;
//! intern_learning::close(db).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod utils;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

pub use config::DatabaseConfig;
pub use database::repository::{
    ApplicationsRepository, EmployersRepository, InternshipsRepository, ReportsRepository,
    ReviewsRepository, StudentsRepository, UsersRepository,
};
pub use error::{Result, SchemaError};

/// Connect and bring the schema up to date.
pub async fn open(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let conn = match database::establish_connection(config).await {
        Ok(conn) => {
            log::info!("Database connection established");
            conn
        }
        Err(e) => {
            log::error!("Cannot establish database connection: {}", e);
            return Err(e);
        }
    };

    log::info!("Running database migrations...");
    match migration::Migrator::up(&conn, None).await {
        Ok(_) => log::info!("Database migrations completed"),
        Err(e) => {
            log::error!("Database migration failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(conn)
}

/// Close the connection, logging the outcome.
pub async fn close(conn: DatabaseConnection) -> Result<()> {
    match database::close_connection(conn).await {
        Ok(_) => {
            log::info!("Database connection closed");
            Ok(())
        }
        Err(e) => {
            log::error!("Error while closing database connection: {}", e);
            Err(e.into())
        }
    }
}
