use super::*;

#[get("/toilets?<is_free>&<is_public>&<is_handicap>&<is_commerce>&<is_verified>&<limit>&<offset>")]
pub fn get_toilets(
    db: sqlite::Connections,
    is_free: Option<bool>,
    is_public: Option<bool>,
    is_handicap: Option<bool>,
    is_commerce: Option<bool>,
    is_verified: Option<bool>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<json::Paged<json::ToiletWithRating>> {
    let filter = ToiletFilter {
        free: is_free,
        public: is_public,
        handicap: is_handicap,
        commerce: is_commerce,
        verified: is_verified,
    };
    let pagination = pagination(offset, limit);
    let db = db.shared()?;
    let total = db.count_toilets(&filter)?;
    let mut data = Vec::new();
    for toilet in db.all_toilets(&filter, &pagination)? {
        let ratings = db.load_ratings_of_toilet(toilet.id.as_str())?;
        let preview = db.load_preview_picture_of_toilet(toilet.id.as_str())?;
        data.push(json::toilet_with_rating(toilet, &ratings, preview, None));
    }
    Ok(Json(json::Paged {
        data,
        meta: page_meta(total, &pagination),
    }))
}

#[get("/toilets/nearby?<latitude>&<longitude>&<radius>&<limit>&<is_free>&<is_public>&<is_handicap>&<is_commerce>")]
pub fn get_toilets_nearby(
    db: sqlite::Connections,
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius: Option<f64>,
    limit: Option<usize>,
    is_free: Option<bool>,
    is_public: Option<bool>,
    is_handicap: Option<bool>,
    is_commerce: Option<bool>,
) -> Result<json::NearbyResponse> {
    // Absent and non-numeric coordinates are indistinguishable
    // here, both are rejected with a client error.
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Err(ParameterError::InvalidPosition.into());
    };
    let query = usecases::NearbyQuery::try_new(latitude, longitude, radius, limit)?;
    let filter = ToiletFilter {
        free: is_free,
        public: is_public,
        handicap: is_handicap,
        commerce: is_commerce,
        verified: None,
    };
    let db = db.shared()?;
    let results = usecases::nearby_toilets(&db, &filter, &query)?;
    let mut data = Vec::new();
    for (toilet, distance) in results {
        let ratings = db.load_ratings_of_toilet(toilet.id.as_str())?;
        let preview = db.load_preview_picture_of_toilet(toilet.id.as_str())?;
        data.push(json::toilet_with_rating(
            toilet,
            &ratings,
            preview,
            Some(distance),
        ));
    }
    let meta = json::NearbyMeta {
        total: data.len() as u64,
        latitude,
        longitude,
        radius_km: query.radius.to_kilometers(),
    };
    Ok(Json(json::NearbyResponse { data, meta }))
}

#[get("/toilets/<id>", rank = 2)]
pub fn get_toilet(db: sqlite::Connections, id: String) -> Result<json::ToiletDetails> {
    let db = db.shared()?;
    let toilet = db.get_toilet(&id)?;
    let review_filter = ReviewFilter {
        toilet_id: Some(toilet.id.clone()),
        ..Default::default()
    };
    let mut reviews = Vec::new();
    for review in db.all_reviews(&review_filter, &Pagination::default())? {
        let user = match db.get_user(review.user_id.as_str()) {
            Ok(user) => Some(user),
            // The reviewer might have deleted their account.
            Err(RepoError::NotFound) => None,
            Err(err) => return Err(err.into()),
        };
        reviews.push((review, user));
    }
    let pictures = db.all_pictures(
        &PictureFilter {
            toilet_id: Some(toilet.id.clone()),
        },
        &Pagination::default(),
    )?;
    Ok(Json(to_json::toilet_details(toilet, reviews, pictures)))
}

#[post("/toilets", format = "application/json", data = "<new_toilet>")]
pub fn post_toilet(
    db: sqlite::Connections,
    _account: Account,
    new_toilet: JsonResult<json::NewToilet>,
) -> CreatedResult<json::Toilet> {
    let new_toilet = from_json::new_toilet(new_toilet?.into_inner());
    let toilet = flows::create_toilet(&db, new_toilet)?;
    let location = format!("/toilets/{}", toilet.id);
    Ok(Created::new(location).body(Json(toilet.into())))
}

#[put("/toilets/<id>", format = "application/json", data = "<update>")]
pub fn put_toilet(
    db: sqlite::Connections,
    _account: Account,
    id: String,
    update: JsonResult<json::UpdateToilet>,
) -> Result<json::Toilet> {
    let update = from_json::update_toilet(update?.into_inner());
    let toilet = flows::update_toilet(&db, &id.into(), update)?;
    Ok(Json(toilet.into()))
}

#[delete("/toilets/<id>")]
pub fn delete_toilet(
    db: sqlite::Connections,
    _account: Account,
    id: String,
) -> Result<json::MessageResponse> {
    flows::delete_toilet(&db, &id.into())?;
    Ok(Json(json::MessageResponse {
        message: "Toilet deleted successfully".into(),
    }))
}

#[post("/toilets/<id>/verify")]
pub fn post_toilet_verify(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::VerifyResponse> {
    {
        let db = db.shared()?;
        // Only admins are entitled to verify toilets
        auth.user_with_min_role(&db, Role::Admin).map_err(|err| {
            debug!("Unauthorized user: {err}");
            err
        })?;
    }
    let outcome = flows::verify_toilet(&db, &id.into())?;
    let message = if outcome.changed {
        "Toilet verified successfully"
    } else {
        "Toilet is already verified"
    };
    Ok(Json(json::VerifyResponse {
        message: message.into(),
        toilet: outcome.toilet.into(),
    }))
}

#[post("/toilets/<id>/unverify")]
pub fn post_toilet_unverify(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::VerifyResponse> {
    {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Admin).map_err(|err| {
            debug!("Unauthorized user: {err}");
            err
        })?;
    }
    let outcome = flows::unverify_toilet(&db, &id.into())?;
    let message = if outcome.changed {
        "Toilet unverified successfully"
    } else {
        "Toilet is not verified"
    };
    Ok(Json(json::VerifyResponse {
        message: message.into(),
        toilet: outcome.toilet.into(),
    }))
}
