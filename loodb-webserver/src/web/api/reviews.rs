use super::*;

#[get("/reviews?<toilet_id>&<user_id>&<min_rating>&<limit>&<offset>")]
pub fn get_reviews(
    db: sqlite::Connections,
    toilet_id: Option<String>,
    user_id: Option<String>,
    min_rating: Option<i8>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<json::Paged<json::Review>> {
    let filter = ReviewFilter {
        toilet_id: toilet_id.map(Into::into),
        user_id: user_id.map(Into::into),
        min_rating: min_rating.map(RatingValue::from),
        ..Default::default()
    };
    let pagination = pagination(offset, limit);
    let db = db.shared()?;
    let total = db.count_reviews(&filter)?;
    let data = db
        .all_reviews(&filter, &pagination)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json::Paged {
        data,
        meta: page_meta(total, &pagination),
    }))
}

#[get("/reviews/<id>")]
pub fn get_review(db: sqlite::Connections, id: String) -> Result<json::ReviewWithUser> {
    let db = db.shared()?;
    let review = db.get_review(&id)?;
    let user = match db.get_user(review.user_id.as_str()) {
        Ok(user) => Some(user),
        Err(RepoError::NotFound) => None,
        Err(err) => return Err(err.into()),
    };
    Ok(Json(json::review_with_user(review, user)))
}

#[post("/reviews", format = "application/json", data = "<new_review>")]
pub fn post_review(
    db: sqlite::Connections,
    account: Account,
    new_review: JsonResult<json::NewReview>,
) -> CreatedResult<json::Review> {
    let user = {
        let db = db.shared()?;
        db.try_get_user_by_email(account.email())?
            .ok_or(ParameterError::Unauthorized)?
    };
    let new_review = from_json::new_review(new_review?.into_inner(), user.id);
    let review = flows::create_review(&db, new_review).map_err(|err| {
        debug!("Unable to create review: {err}");
        err
    })?;
    let location = format!("/reviews/{}", review.id);
    Ok(Created::new(location).body(Json(review.into())))
}

#[delete("/reviews/<id>")]
pub fn delete_review(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let actor = {
        let db = db.shared()?;
        db.try_get_user_by_email(account.email())?
            .ok_or(ParameterError::Unauthorized)?
    };
    flows::delete_review(&db, &actor, &id.into())?;
    Ok(Json(()))
}
