// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds.

use loodb_core::entities as e;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = toilets)]
pub struct NewToilet<'a> {
    pub id: &'a str,
    pub latitude: String,
    pub longitude: String,
    pub is_free: bool,
    pub is_public: bool,
    pub is_handicap: bool,
    pub is_commerce: bool,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl<'a> From<&'a e::Toilet> for NewToilet<'a> {
    fn from(from: &'a e::Toilet) -> Self {
        let (latitude, longitude) = from.pos.to_lat_lng_deg();
        Self {
            id: from.id.as_str(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            is_free: from.attributes.free,
            is_public: from.attributes.public,
            is_handicap: from.attributes.handicap,
            is_commerce: from.attributes.commerce,
            is_verified: from.verified,
            created_at: from.created_at.into_secs(),
            updated_at: from.updated_at.map(e::Timestamp::into_secs),
            deleted_at: from.deleted_at.map(e::Timestamp::into_secs),
        }
    }
}

#[derive(Queryable)]
pub struct ToiletEntity {
    pub id: String,
    pub latitude: String,
    pub longitude: String,
    pub is_free: bool,
    pub is_public: bool,
    pub is_handicap: bool,
    pub is_commerce: bool,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub toilet_id: &'a str,
    pub user_id: &'a str,
    pub rating: i16,
    pub comment: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl<'a> From<&'a e::Review> for NewReview<'a> {
    fn from(from: &'a e::Review) -> Self {
        Self {
            id: from.id.as_str(),
            toilet_id: from.toilet_id.as_str(),
            user_id: from.user_id.as_str(),
            rating: i16::from(e::RatingValuePrimitive::from(from.rating)),
            comment: from.comment.as_deref(),
            created_at: from.created_at.into_secs(),
            updated_at: from.updated_at.map(e::Timestamp::into_secs),
            deleted_at: from.deleted_at.map(e::Timestamp::into_secs),
        }
    }
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: String,
    pub toilet_id: String,
    pub user_id: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl From<ReviewEntity> for e::Review {
    fn from(from: ReviewEntity) -> Self {
        let ReviewEntity {
            id,
            toilet_id,
            user_id,
            rating,
            comment,
            created_at,
            updated_at,
            deleted_at,
        } = from;
        Self {
            id: id.into(),
            toilet_id: toilet_id.into(),
            user_id: user_id.into(),
            rating: e::RatingValue::from(rating as e::RatingValuePrimitive),
            comment,
            created_at: e::Timestamp::from_secs(created_at),
            updated_at: updated_at.map(e::Timestamp::from_secs),
            deleted_at: deleted_at.map(e::Timestamp::from_secs),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = pictures)]
pub struct NewPicture<'a> {
    pub id: &'a str,
    pub toilet_id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub url: &'a str,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl<'a> From<&'a e::Picture> for NewPicture<'a> {
    fn from(from: &'a e::Picture) -> Self {
        Self {
            id: from.id.as_str(),
            toilet_id: from.toilet_id.as_ref().map(e::Id::as_str),
            name: from.name.as_deref(),
            url: from.url.as_str(),
            created_at: from.created_at.into_secs(),
            updated_at: from.updated_at.map(e::Timestamp::into_secs),
            deleted_at: from.deleted_at.map(e::Timestamp::into_secs),
        }
    }
}

#[derive(Queryable)]
pub struct PictureEntity {
    pub id: String,
    pub toilet_id: Option<String>,
    pub name: Option<String>,
    pub url: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl From<PictureEntity> for e::Picture {
    fn from(from: PictureEntity) -> Self {
        let PictureEntity {
            id,
            toilet_id,
            name,
            url,
            created_at,
            updated_at,
            deleted_at,
        } = from;
        Self {
            id: id.into(),
            toilet_id: toilet_id.map(Into::into),
            name,
            url,
            created_at: e::Timestamp::from_secs(created_at),
            updated_at: updated_at.map(e::Timestamp::from_secs),
            deleted_at: deleted_at.map(e::Timestamp::from_secs),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub image: Option<&'a str>,
    pub role: i16,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

impl<'a> From<&'a e::User> for NewUser<'a> {
    fn from(from: &'a e::User) -> Self {
        Self {
            id: from.id.as_str(),
            name: from.name.as_str(),
            email: from.email.as_str(),
            password: from.password.to_hash(),
            image: from.image.as_deref(),
            role: e::RolePrimitive::from(from.role),
            created_at: from.created_at.into_secs(),
            updated_at: from.updated_at.map(e::Timestamp::into_secs),
            deleted_at: from.deleted_at.map(e::Timestamp::into_secs),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
    pub role: i16,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}
