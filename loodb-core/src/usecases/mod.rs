mod authorize;
mod change_user_role;
mod create_picture;
mod create_review;
mod create_toilet;
mod delete_review;
mod delete_toilet;
mod error;
mod login;
mod nearby_toilets;
mod register;
mod search;
mod stats;
mod update_toilet;
mod verify_toilet;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, change_user_role::*, create_picture::*, create_review::*, create_toilet::*,
    delete_review::*, delete_toilet::*, error::Error, login::*, nearby_toilets::*, register::*,
    search::*, stats::*, update_toilet::*, verify_toilet::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

pub fn get_user<R>(repo: &R, actor: &User, user_id: &Id) -> Result<User>
where
    R: UserRepo,
{
    if actor.role < Role::Admin && actor.id != *user_id {
        return Err(Error::Forbidden);
    }
    Ok(repo.get_user(user_id.as_str())?)
}

pub fn delete_user<R>(repo: &R, actor: &User, user_id: &Id) -> Result<()>
where
    R: UserRepo,
{
    if actor.role < Role::Admin && actor.id != *user_id {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user_id.as_str())?;
    user.deleted_at = Some(Timestamp::now());
    Ok(repo.update_user(&user)?)
}

pub fn delete_picture<R>(repo: &R, id: &Id) -> Result<()>
where
    R: PictureRepo,
{
    let mut picture = repo.get_picture(id.as_str())?;
    picture.deleted_at = Some(Timestamp::now());
    Ok(repo.update_picture(&picture)?)
}
