//! # loodb-core
//!
//! Business logic of openloodb: repository abstractions
//! and use cases operating on the domain entities.

pub mod entities {
    pub use loodb_entities::{
        email::*, geo::*, id::*, password::*, picture::*, review::*, time::*, toilet::*, user::*,
    };
}

pub mod repositories;
pub mod usecases;
pub mod util;
