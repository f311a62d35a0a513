use super::*;

pub fn create_review(
    connections: &sqlite::Connections,
    new_review: usecases::NewReview,
) -> Result<Review> {
    let mut connection = connections.exclusive()?;
    let review = connection
        .transaction(|conn| usecases::create_review(conn, new_review))
        .inspect_err(|err| {
            warn!("Failed to create review: {err}");
        })?;
    Ok(review)
}
