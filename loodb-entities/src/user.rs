use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{email::*, id::*, password::*, time::*};

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    User  = 0,
    Admin = 1,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub image      : Option<String>,
    pub role       : Role,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
    pub deleted_at : Option<Timestamp>,
}

impl User {
    pub fn exists(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role() {
        assert_eq!(Ok(Role::User), "user".parse());
        assert_eq!(Ok(Role::Admin), "Admin".parse());
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn role_primitive_round_trip() {
        assert_eq!(Role::User, Role::try_from(RolePrimitive::from(Role::User)).unwrap());
        assert_eq!(Role::Admin, Role::try_from(RolePrimitive::from(Role::Admin)).unwrap());
        assert!(Role::try_from(7).is_err());
    }
}
