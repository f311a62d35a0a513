use super::prelude::*;

// Matches the coordinate box scan of the original search:
// +/- 0.01 degrees around the given point.
const COORD_SEARCH_BOX_DEG: f64 = 0.01;

/// Free-text search over toilets.
///
/// A query of the shape `lat,lng` finds toilets in a small
/// coordinate box around that point. Any other query matches
/// the comments of their reviews (case-insensitive).
pub fn search_toilets<R>(repo: &R, query: &str, pagination: &Pagination) -> Result<Vec<Toilet>>
where
    R: ToiletRepo + ReviewRepo,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptySearchQuery);
    }
    if let Ok(center) = query.parse::<MapPoint>() {
        return search_toilets_by_position(repo, center, pagination);
    }
    search_toilets_by_review_comment(repo, query, pagination)
}

fn search_toilets_by_position<R: ToiletRepo>(
    repo: &R,
    center: MapPoint,
    pagination: &Pagination,
) -> Result<Vec<Toilet>> {
    let (lat, lng) = center.to_lat_lng_deg();
    // Full scan, consistent with the proximity query.
    let candidates = repo.all_toilets(&Default::default(), &Pagination::default())?;
    let mut results: Vec<_> = candidates
        .into_iter()
        .filter(|toilet| {
            let (t_lat, t_lng) = toilet.pos.to_lat_lng_deg();
            (t_lat - lat).abs() <= COORD_SEARCH_BOX_DEG && (t_lng - lng).abs() <= COORD_SEARCH_BOX_DEG
        })
        .collect();
    paginate(&mut results, pagination);
    Ok(results)
}

fn search_toilets_by_review_comment<R>(
    repo: &R,
    text: &str,
    pagination: &Pagination,
) -> Result<Vec<Toilet>>
where
    R: ToiletRepo + ReviewRepo,
{
    let filter = ReviewFilter {
        comment_contains: Some(text.to_owned()),
        ..Default::default()
    };
    let reviews = repo.all_reviews(&filter, &Pagination::default())?;
    let mut toilet_ids: Vec<Id> = Vec::new();
    for review in reviews {
        if !toilet_ids.contains(&review.toilet_id) {
            toilet_ids.push(review.toilet_id);
        }
    }
    let mut results = Vec::with_capacity(toilet_ids.len());
    for id in toilet_ids {
        match repo.get_toilet(id.as_str()) {
            Ok(toilet) => results.push(toilet),
            // The reviewed toilet might have been soft-deleted meanwhile.
            Err(RepoError::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    paginate(&mut results, pagination);
    Ok(results)
}

fn paginate<T>(results: &mut Vec<T>, pagination: &Pagination) {
    let offset = pagination.offset.unwrap_or(0) as usize;
    if offset > 0 {
        results.drain(..offset.min(results.len()));
    }
    if let Some(limit) = pagination.limit {
        results.truncate(limit as usize);
    }
}
