use super::prelude::*;

// Only the author or an admin may remove a review.
pub fn delete_review<R: ReviewRepo>(repo: &R, actor: &User, id: &Id) -> Result<()> {
    let mut review = repo.get_review(id.as_str())?;
    if actor.role < Role::Admin && review.user_id != actor.id {
        return Err(Error::Forbidden);
    }
    review.deleted_at = Some(Timestamp::now());
    repo.update_review(&review)?;
    Ok(())
}
