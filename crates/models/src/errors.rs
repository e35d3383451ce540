use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate value: {0}")]
    Duplicate(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    /// Unique index rejections become `Duplicate` so callers can report a conflict.
    fn from(e: DbErr) -> Self {
        classify(e.sql_err(), e)
    }
}

/// Map a driver error, already decoded by `DbErr::sql_err`, to a model error.
fn classify(sql_err: Option<SqlErr>, e: DbErr) -> ModelError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => ModelError::Duplicate(detail),
        _ => match e {
            DbErr::RecordNotFound(what) => ModelError::NotFound(what),
            DbErr::RecordNotUpdated => ModelError::NotFound("no row matched the update".into()),
            other => ModelError::Db(other.to_string()),
        },
    }
}
