use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} already exists (key={key})")]
    DuplicateKey { entity: &'static str, key: String },
    #[error("{entity} references a missing record ({reference})")]
    ForeignKey {
        entity: &'static str,
        reference: String,
    },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    /// Classifies a failed write. Constraint violations reported by the store
    /// become typed errors; anything else stays a raw database error.
    pub fn from_write(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                DaoLayerError::DuplicateKey { entity, key: detail }
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => DaoLayerError::ForeignKey {
                entity,
                reference: detail,
            },
            _ => DaoLayerError::Db(err),
        }
    }
}
