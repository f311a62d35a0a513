use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub id         : Id,
    pub toilet_id  : Option<Id>,
    pub name       : Option<String>,
    pub url        : String,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
    pub deleted_at : Option<Timestamp>,
}

impl Picture {
    pub fn exists(&self) -> bool {
        self.deleted_at.is_none()
    }
}
