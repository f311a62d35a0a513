use diesel::sqlite::Sqlite;

use super::*;

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn all_reviews(&self, filter: &ReviewFilter, pagination: &Pagination) -> Result<Vec<Review>> {
        all_reviews(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_reviews(&self, filter: &ReviewFilter) -> Result<u64> {
        count_reviews(&mut self.conn.borrow_mut(), filter)
    }

    fn try_get_review_of_user_for_toilet(
        &self,
        user_id: &str,
        toilet_id: &str,
    ) -> Result<Option<Review>> {
        try_get_review_of_user_for_toilet(&mut self.conn.borrow_mut(), user_id, toilet_id)
    }

    fn load_ratings_of_toilet(&self, toilet_id: &str) -> Result<Vec<RatingValue>> {
        load_ratings_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
    fn load_all_ratings(&self) -> Result<Vec<RatingValue>> {
        load_all_ratings(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReviewRepo for DbReadWrite<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn all_reviews(&self, filter: &ReviewFilter, pagination: &Pagination) -> Result<Vec<Review>> {
        all_reviews(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_reviews(&self, filter: &ReviewFilter) -> Result<u64> {
        count_reviews(&mut self.conn.borrow_mut(), filter)
    }

    fn try_get_review_of_user_for_toilet(
        &self,
        user_id: &str,
        toilet_id: &str,
    ) -> Result<Option<Review>> {
        try_get_review_of_user_for_toilet(&mut self.conn.borrow_mut(), user_id, toilet_id)
    }

    fn load_ratings_of_toilet(&self, toilet_id: &str) -> Result<Vec<RatingValue>> {
        load_ratings_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
    fn load_all_ratings(&self) -> Result<Vec<RatingValue>> {
        load_all_ratings(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn all_reviews(&self, filter: &ReviewFilter, pagination: &Pagination) -> Result<Vec<Review>> {
        all_reviews(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_reviews(&self, filter: &ReviewFilter) -> Result<u64> {
        count_reviews(&mut self.conn.borrow_mut(), filter)
    }

    fn try_get_review_of_user_for_toilet(
        &self,
        user_id: &str,
        toilet_id: &str,
    ) -> Result<Option<Review>> {
        try_get_review_of_user_for_toilet(&mut self.conn.borrow_mut(), user_id, toilet_id)
    }

    fn load_ratings_of_toilet(&self, toilet_id: &str) -> Result<Vec<RatingValue>> {
        load_ratings_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
    fn load_all_ratings(&self) -> Result<Vec<RatingValue>> {
        load_all_ratings(&mut self.conn.borrow_mut())
    }
}

fn filtered_reviews<'a>(filter: &ReviewFilter) -> schema::reviews::BoxedQuery<'a, Sqlite> {
    use schema::reviews::dsl;
    let mut query = dsl::reviews
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(toilet_id) = &filter.toilet_id {
        query = query.filter(dsl::toilet_id.eq(toilet_id.to_string()));
    }
    if let Some(user_id) = &filter.user_id {
        query = query.filter(dsl::user_id.eq(user_id.to_string()));
    }
    if let Some(min_rating) = filter.min_rating {
        let min = i16::from(RatingValuePrimitive::from(min_rating));
        query = query.filter(dsl::rating.ge(min));
    }
    if let Some(text) = &filter.comment_contains {
        // LIKE is case-insensitive for ASCII in SQLite
        query = query.filter(dsl::comment.like(format!("%{text}%")));
    }
    query
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let new_review = models::NewReview::from(review);
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let models::NewReview {
        id,
        rating,
        comment,
        updated_at,
        deleted_at,
        ..
    } = models::NewReview::from(review);
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(id)))
        .set((
            dsl::rating.eq(rating),
            dsl::comment.eq(comment),
            dsl::updated_at.eq(updated_at),
            dsl::deleted_at.eq(deleted_at),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_reviews(
    conn: &mut SqliteConnection,
    filter: &ReviewFilter,
    pagination: &Pagination,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let mut query = filtered_reviews(filter).order(dsl::created_at.desc());
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_reviews(conn: &mut SqliteConnection, filter: &ReviewFilter) -> Result<u64> {
    use schema::reviews::dsl;
    let mut query = dsl::reviews
        .select(diesel::dsl::count_star())
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(toilet_id) = &filter.toilet_id {
        query = query.filter(dsl::toilet_id.eq(toilet_id.to_string()));
    }
    if let Some(user_id) = &filter.user_id {
        query = query.filter(dsl::user_id.eq(user_id.to_string()));
    }
    if let Some(min_rating) = filter.min_rating {
        let min = i16::from(RatingValuePrimitive::from(min_rating));
        query = query.filter(dsl::rating.ge(min));
    }
    if let Some(text) = &filter.comment_contains {
        query = query.filter(dsl::comment.like(format!("%{text}%")));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}

fn try_get_review_of_user_for_toilet(
    conn: &mut SqliteConnection,
    user_id: &str,
    toilet_id: &str,
) -> Result<Option<Review>> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::toilet_id.eq(toilet_id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::ReviewEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn load_ratings_of_toilet(conn: &mut SqliteConnection, toilet_id: &str) -> Result<Vec<RatingValue>> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .select(dsl::rating)
        .filter(dsl::toilet_id.eq(toilet_id))
        .filter(dsl::deleted_at.is_null())
        .load::<i16>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|rating| RatingValue::from(rating as RatingValuePrimitive))
        .collect())
}

fn load_all_ratings(conn: &mut SqliteConnection) -> Result<Vec<RatingValue>> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .select(dsl::rating)
        .filter(dsl::deleted_at.is_null())
        .load::<i16>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|rating| RatingValue::from(rating as RatingValuePrimitive))
        .collect())
}
