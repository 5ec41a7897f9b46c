use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// `DbErr::Custom` carries validation messages raised inside `before_save`
    /// hooks; everything else is a genuine database failure.
    pub fn from_db(e: DbErr) -> Self {
        match e {
            DbErr::Custom(msg) => ModelError::Validation(msg),
            other => ModelError::Db(other.to_string()),
        }
    }
}
