use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The user has already reviewed this toilet")]
    AlreadyReviewed,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Invalid role")]
    Role,
    #[error("Missing picture URL")]
    PictureUrl,
    #[error("Missing search query")]
    EmptySearchQuery,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<loodb_entities::password::ParseError> for Error {
    fn from(_: loodb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<loodb_entities::email::EmailAddressParseError> for Error {
    fn from(_: loodb_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<loodb_entities::geo::CoordRangeError> for Error {
    fn from(_: loodb_entities::geo::CoordRangeError) -> Self {
        Self::InvalidPosition
    }
}
