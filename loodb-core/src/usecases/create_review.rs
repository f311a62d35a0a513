use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub toilet_id: Id,
    pub user_id: Id,
    pub rating: RatingValuePrimitive,
    pub comment: Option<String>,
}

pub fn create_review<R>(repo: &R, new: NewReview) -> Result<Review>
where
    R: ReviewRepo + ToiletRepo + UserRepo,
{
    let NewReview {
        toilet_id,
        user_id,
        rating,
        comment,
    } = new;
    let rating = RatingValue::from(rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    // Both referenced rows must exist and be visible.
    let _ = repo.get_toilet(toilet_id.as_str())?;
    let _ = repo.get_user(user_id.as_str())?;
    // A user may review a given toilet at most once.
    if repo
        .try_get_review_of_user_for_toilet(user_id.as_str(), toilet_id.as_str())?
        .is_some()
    {
        return Err(Error::AlreadyReviewed);
    }
    let review = Review {
        id: Id::new(),
        toilet_id,
        user_id,
        rating,
        comment: comment.filter(|c| !c.trim().is_empty()),
        created_at: Timestamp::now(),
        updated_at: None,
        deleted_at: None,
    };
    repo.create_review(&review)?;
    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn db_with_toilet_and_user() -> MockDb {
        let db = MockDb::default();
        db.toilets
            .borrow_mut()
            .push(Toilet::build().id("toilet").finish());
        db.users.borrow_mut().push(User::build().id("user").finish());
        db
    }

    fn new_review(rating: i8) -> NewReview {
        NewReview {
            toilet_id: "toilet".into(),
            user_id: "user".into(),
            rating,
            comment: Some("clean".into()),
        }
    }

    #[test]
    fn create_valid_review() {
        let db = db_with_toilet_and_user();
        let review = create_review(&db, new_review(4)).unwrap();
        assert_eq!(RatingValue::from(4), review.rating);
        assert_eq!(Some("clean"), review.comment.as_deref());
    }

    #[test]
    fn reject_rating_out_of_range() {
        let db = db_with_toilet_and_user();
        assert!(matches!(
            create_review(&db, new_review(0)),
            Err(Error::RatingValue)
        ));
        assert!(matches!(
            create_review(&db, new_review(6)),
            Err(Error::RatingValue)
        ));
    }

    #[test]
    fn reject_duplicate_review() {
        let db = db_with_toilet_and_user();
        assert!(create_review(&db, new_review(4)).is_ok());
        assert!(matches!(
            create_review(&db, new_review(2)),
            Err(Error::AlreadyReviewed)
        ));
    }

    #[test]
    fn reject_unknown_references() {
        let db = db_with_toilet_and_user();
        let review = NewReview {
            toilet_id: "unknown".into(),
            ..new_review(4)
        };
        assert!(matches!(
            create_review(&db, review),
            Err(Error::Repo(RepoError::NotFound))
        ));
        let review = NewReview {
            user_id: "unknown".into(),
            ..new_review(4)
        };
        assert!(matches!(
            create_review(&db, review),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn drop_blank_comment() {
        let db = db_with_toilet_and_user();
        let review = NewReview {
            comment: Some("   ".into()),
            ..new_review(4)
        };
        assert_eq!(None, create_review(&db, review).unwrap().comment);
    }
}
