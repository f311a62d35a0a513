//! # loodb-boundary
//!
//! Serializable, anemic data structures for accessing the
//! openloodb API in a type-safe manner.

use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::{review_with_user, toilet_with_rating};

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Toilet {
    pub id          : String,
    pub latitude    : f64,
    pub longitude   : f64,
    pub is_free     : bool,
    pub is_public   : bool,
    pub is_handicap : bool,
    pub is_commerce : bool,
    pub is_verified : bool,
    pub created_at  : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at  : Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToiletWithRating {
    pub id              : String,
    pub latitude        : f64,
    pub longitude       : f64,
    pub is_free         : bool,
    pub is_public       : bool,
    pub is_handicap     : bool,
    pub is_commerce     : bool,
    pub is_verified     : bool,
    pub created_at      : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at      : Option<i64>,
    pub avg_rating      : Option<f64>,
    pub review_count    : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_picture : Option<Picture>,
    // Only present in the results of a nearby search (in km)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance        : Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToiletDetails {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_free: bool,
    pub is_public: bool,
    pub is_handicap: bool,
    pub is_commerce: bool,
    pub is_verified: bool,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    pub avg_rating: Option<f64>,
    pub review_count: u64,
    pub reviews: Vec<ReviewWithUser>,
    pub pictures: Vec<Picture>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewToilet {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_handicap: bool,
    #[serde(default)]
    pub is_commerce: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateToilet {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_free: Option<bool>,
    pub is_public: Option<bool>,
    pub is_handicap: Option<bool>,
    pub is_commerce: Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id         : String,
    pub toilet_id  : String,
    pub user_id    : String,
    pub rating     : i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment    : Option<String>,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewUser {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewWithUser {
    pub id: String,
    pub toilet_id: String,
    pub user_id: String,
    pub rating: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: i64,
    pub user: Option<ReviewUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub toilet_id: String,
    pub rating: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Picture {
    pub id         : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toilet_id  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name       : Option<String>,
    pub url        : String,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewPicture {
    pub toilet_id: Option<String>,
    pub name: Option<String>,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id         : String,
    pub name       : String,
    pub email      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image      : Option<String>,
    pub role       : UserRole,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserId {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NearbyMeta {
    pub total: u64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NearbyResponse {
    pub data: Vec<ToiletWithRating>,
    pub meta: NearbyMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopRatedToilet {
    pub toilet: Toilet,
    pub avg_rating: f64,
    pub review_count: u64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_toilets    : u64,
    pub verified_toilets : u64,
    pub free_toilets     : u64,
    pub public_toilets   : u64,
    pub handicap_toilets : u64,
    pub commerce_toilets : u64,
    pub total_reviews    : u64,
    pub avg_rating       : Option<f64>,
    pub total_users      : u64,
    pub total_pictures   : u64,
    pub top_rated        : Vec<TopRatedToilet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerifyResponse {
    pub message: String,
    pub toilet: Toilet,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

/// Generic JSON error body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
