use super::prelude::*;

// Soft delete: the row is kept but excluded from all
// subsequent reads.
pub fn delete_toilet<R: ToiletRepo>(repo: &R, id: &Id) -> Result<()> {
    let mut toilet = repo.get_toilet(id.as_str())?;
    toilet.deleted_at = Some(Timestamp::now());
    repo.update_toilet(&toilet)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn delete_toilet_twice() {
        let db = MockDb::default();
        db.toilets
            .borrow_mut()
            .push(Toilet::build().id("foo").finish());
        assert!(delete_toilet(&db, &"foo".into()).is_ok());
        // A soft-deleted row is no longer a valid target
        assert!(matches!(
            delete_toilet(&db, &"foo".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
