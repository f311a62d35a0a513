// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.
//
// All read methods exclude soft-deleted rows.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Exact-match filters on the boolean attributes of a toilet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToiletFilter {
    pub free: Option<bool>,
    pub public: Option<bool>,
    pub handicap: Option<bool>,
    pub commerce: Option<bool>,
    pub verified: Option<bool>,
}

impl ToiletFilter {
    pub fn matches(&self, toilet: &Toilet) -> bool {
        let ToiletAttributes {
            free,
            public,
            handicap,
            commerce,
        } = toilet.attributes;
        self.free.map_or(true, |v| v == free)
            && self.public.map_or(true, |v| v == public)
            && self.handicap.map_or(true, |v| v == handicap)
            && self.commerce.map_or(true, |v| v == commerce)
            && self.verified.map_or(true, |v| v == toilet.verified)
    }
}

pub trait ToiletRepo {
    fn create_toilet(&self, toilet: &Toilet) -> Result<()>;
    fn update_toilet(&self, toilet: &Toilet) -> Result<()>;

    fn get_toilet(&self, id: &str) -> Result<Toilet>;
    fn all_toilets(&self, filter: &ToiletFilter, pagination: &Pagination) -> Result<Vec<Toilet>>;
    fn count_toilets(&self, filter: &ToiletFilter) -> Result<u64>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub toilet_id: Option<Id>,
    pub user_id: Option<Id>,
    pub min_rating: Option<RatingValue>,
    // Case-insensitive substring match on the comment
    pub comment_contains: Option<String>,
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    // Newest first
    fn all_reviews(&self, filter: &ReviewFilter, pagination: &Pagination) -> Result<Vec<Review>>;
    fn count_reviews(&self, filter: &ReviewFilter) -> Result<u64>;

    fn try_get_review_of_user_for_toilet(
        &self,
        user_id: &str,
        toilet_id: &str,
    ) -> Result<Option<Review>>;

    fn load_ratings_of_toilet(&self, toilet_id: &str) -> Result<Vec<RatingValue>>;
    fn load_all_ratings(&self) -> Result<Vec<RatingValue>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PictureFilter {
    pub toilet_id: Option<Id>,
}

pub trait PictureRepo {
    fn create_picture(&self, picture: &Picture) -> Result<()>;
    fn update_picture(&self, picture: &Picture) -> Result<()>;

    fn get_picture(&self, id: &str) -> Result<Picture>;
    fn all_pictures(&self, filter: &PictureFilter, pagination: &Pagination)
        -> Result<Vec<Picture>>;
    fn count_pictures(&self, filter: &PictureFilter) -> Result<u64>;

    fn load_preview_picture_of_toilet(&self, toilet_id: &str) -> Result<Option<Picture>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub email: Option<EmailAddress>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn all_users(&self, filter: &UserFilter, pagination: &Pagination) -> Result<Vec<User>>;
    fn count_users(&self, filter: &UserFilter) -> Result<u64>;
}
