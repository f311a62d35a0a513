use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPicture {
    pub toilet_id: Option<Id>,
    pub name: Option<String>,
    pub url: String,
}

pub fn create_picture<R>(repo: &R, new: NewPicture) -> Result<Picture>
where
    R: PictureRepo + ToiletRepo,
{
    let NewPicture {
        toilet_id,
        name,
        url,
    } = new;
    if url.trim().is_empty() {
        return Err(Error::PictureUrl);
    }
    if let Some(toilet_id) = &toilet_id {
        let _ = repo.get_toilet(toilet_id.as_str())?;
    }
    let picture = Picture {
        id: Id::new(),
        toilet_id,
        name,
        url,
        created_at: Timestamp::now(),
        updated_at: None,
        deleted_at: None,
    };
    repo.create_picture(&picture)?;
    Ok(picture)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn create_unattached_picture() {
        let db = MockDb::default();
        let new = NewPicture {
            toilet_id: None,
            name: None,
            url: "https://example.com/p.jpg".into(),
        };
        assert!(create_picture(&db, new).is_ok());
    }

    #[test]
    fn reject_empty_url() {
        let db = MockDb::default();
        let new = NewPicture {
            toilet_id: None,
            name: None,
            url: " ".into(),
        };
        assert!(matches!(create_picture(&db, new), Err(Error::PictureUrl)));
    }

    #[test]
    fn reject_unknown_toilet_reference() {
        let db = MockDb::default();
        let new = NewPicture {
            toilet_id: Some("unknown".into()),
            name: None,
            url: "https://example.com/p.jpg".into(),
        };
        assert!(matches!(
            create_picture(&db, new),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
