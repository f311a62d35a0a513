#[macro_use]
extern crate log;

mod change_user_role;
mod create_picture;
mod create_review;
mod create_toilet;
mod delete_picture;
mod delete_review;
mod delete_toilet;
mod delete_user;
mod register_user;
mod update_toilet;
mod verify_toilet;

pub mod prelude {
    pub use super::{
        change_user_role::*, create_picture::*, create_review::*, create_toilet::*,
        delete_picture::*, delete_review::*, delete_toilet::*, delete_user::*, register_user::*,
        update_toilet::*, verify_toilet::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use loodb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use loodb_db_sqlite::Connections;
}
