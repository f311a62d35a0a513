use anyhow::anyhow;
use diesel::{prelude::*, result::Error as DieselError};

use loodb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod picture;
mod review;
mod toilet;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_map_point(latitude: &str, longitude: &str) -> Result<MapPoint> {
    let lat = latitude
        .parse::<f64>()
        .map_err(|err| anyhow!("Invalid latitude '{latitude}': {err}"))?;
    let lng = longitude
        .parse::<f64>()
        .map_err(|err| anyhow!("Invalid longitude '{longitude}': {err}"))?;
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|_| anyhow!("Position out of range: {lat},{lng}").into())
}

fn load_toilet(entity: models::ToiletEntity) -> Result<Toilet> {
    let pos = load_map_point(&entity.latitude, &entity.longitude)?;
    let models::ToiletEntity {
        id,
        is_free,
        is_public,
        is_handicap,
        is_commerce,
        is_verified,
        created_at,
        updated_at,
        deleted_at,
        ..
    } = entity;
    Ok(Toilet {
        id: id.into(),
        pos,
        attributes: ToiletAttributes {
            free: is_free,
            public: is_public,
            handicap: is_handicap,
            commerce: is_commerce,
        },
        verified: is_verified,
        created_at: Timestamp::from_secs(created_at),
        updated_at: updated_at.map(Timestamp::from_secs),
        deleted_at: deleted_at.map(Timestamp::from_secs),
    })
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let role = Role::try_from(entity.role).map_err(|err| anyhow!(err))?;
    let models::UserEntity {
        id,
        name,
        email,
        password,
        image,
        created_at,
        updated_at,
        deleted_at,
        ..
    } = entity;
    Ok(User {
        id: id.into(),
        name,
        email: EmailAddress::new_unchecked(email),
        password: Password::from_hash(password),
        image,
        role,
        created_at: Timestamp::from_secs(created_at),
        updated_at: updated_at.map(Timestamp::from_secs),
        deleted_at: deleted_at.map(Timestamp::from_secs),
    })
}
