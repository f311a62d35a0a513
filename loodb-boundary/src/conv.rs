//! Conversions between entities and boundary types.

use loodb_entities as e;

use super::*;

impl From<e::toilet::Toilet> for Toilet {
    fn from(from: e::toilet::Toilet) -> Self {
        let (latitude, longitude) = from.pos.to_lat_lng_deg();
        let e::toilet::Toilet {
            id,
            attributes,
            verified,
            created_at,
            updated_at,
            ..
        } = from;
        Self {
            id: id.into(),
            latitude,
            longitude,
            is_free: attributes.free,
            is_public: attributes.public,
            is_handicap: attributes.handicap,
            is_commerce: attributes.commerce,
            is_verified: verified,
            created_at: created_at.into_secs(),
            updated_at: updated_at.map(e::time::Timestamp::into_secs),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            toilet_id,
            user_id,
            rating,
            comment,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            toilet_id: toilet_id.into(),
            user_id: user_id.into(),
            rating: rating.into(),
            comment,
            created_at: created_at.into_secs(),
        }
    }
}

impl From<e::picture::Picture> for Picture {
    fn from(from: e::picture::Picture) -> Self {
        let e::picture::Picture {
            id,
            toilet_id,
            name,
            url,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            toilet_id: toilet_id.map(Into::into),
            name,
            url,
            created_at: created_at.into_secs(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        match from {
            e::user::Role::User => Self::User,
            e::user::Role::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            image,
            role,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into(),
            image,
            role: role.into(),
            created_at: created_at.into_secs(),
        }
    }
}

impl From<e::user::User> for ReviewUser {
    fn from(from: e::user::User) -> Self {
        let e::user::User { name, image, .. } = from;
        Self { name, image }
    }
}

pub fn toilet_with_rating(
    toilet: e::toilet::Toilet,
    ratings: &[e::review::RatingValue],
    preview_picture: Option<e::picture::Picture>,
    distance: Option<e::geo::Distance>,
) -> ToiletWithRating {
    let Toilet {
        id,
        latitude,
        longitude,
        is_free,
        is_public,
        is_handicap,
        is_commerce,
        is_verified,
        created_at,
        updated_at,
    } = toilet.into();
    ToiletWithRating {
        id,
        latitude,
        longitude,
        is_free,
        is_public,
        is_handicap,
        is_commerce,
        is_verified,
        created_at,
        updated_at,
        avg_rating: e::review::AvgRating::of(ratings).map(Into::into),
        review_count: ratings.len() as u64,
        preview_picture: preview_picture.map(Into::into),
        distance: distance.map(e::geo::Distance::to_kilometers),
    }
}

pub fn review_with_user(review: e::review::Review, user: Option<e::user::User>) -> ReviewWithUser {
    let Review {
        id,
        toilet_id,
        user_id,
        rating,
        comment,
        created_at,
    } = review.into();
    ReviewWithUser {
        id,
        toilet_id,
        user_id,
        rating,
        comment,
        created_at,
        user: user.map(Into::into),
    }
}
