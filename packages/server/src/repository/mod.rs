pub mod quiz;

use quiz_common::{ErrorKind, ValidationErrors};
use sea_orm::DbErr;

/// Errors surfaced by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("invalid quiz: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("there is no quiz with id={0}")]
    NotFound(i32),
    #[error(transparent)]
    Storage(#[from] DbErr),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepoError::Validation(_) => ErrorKind::Validation,
            RepoError::NotFound(_) => ErrorKind::NotFound,
            RepoError::Storage(_) => ErrorKind::Infrastructure,
        }
    }
}
