//! Errors surfaced by the schema layer.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field failed a boundary check before reaching the store.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A choice field received a value outside its vocabulary.
    #[error("{value:?} is not a valid choice for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("duplicate {entity}: {detail}")]
    Duplicate { entity: &'static str, detail: String },

    /// A foreign key points at a row that does not exist.
    #[error("{entity} references a missing parent: {detail}")]
    MissingParent { entity: &'static str, detail: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SchemaError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Classifies a store error raised while writing `entity`.
    pub(crate) fn from_db(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Duplicate { entity, detail },
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::MissingParent { entity, detail }
            }
            _ => Self::Db(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_missing_parent(&self) -> bool {
        matches!(self, Self::MissingParent { .. })
    }
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
