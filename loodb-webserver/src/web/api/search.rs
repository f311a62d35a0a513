use super::*;

#[get("/search?<q>&<limit>&<offset>")]
pub fn get_search(
    db: sqlite::Connections,
    q: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<json::Paged<json::ToiletWithRating>> {
    let q = q.ok_or(ParameterError::EmptySearchQuery)?;
    let pagination = pagination(offset, limit);
    let db = db.shared()?;
    let toilets = usecases::search_toilets(&db, &q, &pagination)?;
    let mut data = Vec::new();
    for toilet in toilets {
        let ratings = db.load_ratings_of_toilet(toilet.id.as_str())?;
        let preview = db.load_preview_picture_of_toilet(toilet.id.as_str())?;
        data.push(json::toilet_with_rating(toilet, &ratings, preview, None));
    }
    let total = data.len() as u64;
    Ok(Json(json::Paged {
        data,
        meta: page_meta(total, &pagination),
    }))
}
