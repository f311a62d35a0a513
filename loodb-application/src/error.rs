use std::io;

use thiserror::Error;

use loodb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use loodb_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("Internal error: {0}")]
    Internal(String),
}

// Repository errors that bubble up through a use case keep
// their own variant so that the web layer can distinguish
// a missing entity from an invalid parameter.
impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<loodb_entities::password::ParseError> for AppError {
    fn from(err: loodb_entities::password::ParseError) -> Self {
        AppError::Business(BError::Parameter(err.into()))
    }
}

impl From<loodb_entities::email::EmailAddressParseError> for AppError {
    fn from(err: loodb_entities::email::EmailAddressParseError) -> Self {
        AppError::Business(BError::Parameter(err.into()))
    }
}
