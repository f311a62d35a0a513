use crate::{geo::*, id::*, time::*};

/// The boolean attributes of a toilet that can be used
/// as exact-match filters.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToiletAttributes {
    pub free     : bool,
    pub public   : bool,
    pub handicap : bool,
    pub commerce : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Toilet {
    pub id         : Id,
    pub pos        : MapPoint,
    pub attributes : ToiletAttributes,
    // Only mutated by the dedicated verify/unverify operations.
    pub verified   : bool,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
    pub deleted_at : Option<Timestamp>,
}

impl Toilet {
    pub fn exists(&self) -> bool {
        self.deleted_at.is_none()
    }
}
