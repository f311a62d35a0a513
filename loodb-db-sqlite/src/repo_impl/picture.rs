use diesel::sqlite::Sqlite;

use super::*;

impl<'a> PictureRepo for DbReadOnly<'a> {
    fn create_picture(&self, _picture: &Picture) -> Result<()> {
        unreachable!();
    }
    fn update_picture(&self, _picture: &Picture) -> Result<()> {
        unreachable!();
    }

    fn get_picture(&self, id: &str) -> Result<Picture> {
        get_picture(&mut self.conn.borrow_mut(), id)
    }
    fn all_pictures(
        &self,
        filter: &PictureFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Picture>> {
        all_pictures(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_pictures(&self, filter: &PictureFilter) -> Result<u64> {
        count_pictures(&mut self.conn.borrow_mut(), filter)
    }

    fn load_preview_picture_of_toilet(&self, toilet_id: &str) -> Result<Option<Picture>> {
        load_preview_picture_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
}

impl<'a> PictureRepo for DbReadWrite<'a> {
    fn create_picture(&self, picture: &Picture) -> Result<()> {
        create_picture(&mut self.conn.borrow_mut(), picture)
    }
    fn update_picture(&self, picture: &Picture) -> Result<()> {
        update_picture(&mut self.conn.borrow_mut(), picture)
    }

    fn get_picture(&self, id: &str) -> Result<Picture> {
        get_picture(&mut self.conn.borrow_mut(), id)
    }
    fn all_pictures(
        &self,
        filter: &PictureFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Picture>> {
        all_pictures(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_pictures(&self, filter: &PictureFilter) -> Result<u64> {
        count_pictures(&mut self.conn.borrow_mut(), filter)
    }

    fn load_preview_picture_of_toilet(&self, toilet_id: &str) -> Result<Option<Picture>> {
        load_preview_picture_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
}

impl<'a> PictureRepo for DbConnection<'a> {
    fn create_picture(&self, picture: &Picture) -> Result<()> {
        create_picture(&mut self.conn.borrow_mut(), picture)
    }
    fn update_picture(&self, picture: &Picture) -> Result<()> {
        update_picture(&mut self.conn.borrow_mut(), picture)
    }

    fn get_picture(&self, id: &str) -> Result<Picture> {
        get_picture(&mut self.conn.borrow_mut(), id)
    }
    fn all_pictures(
        &self,
        filter: &PictureFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Picture>> {
        all_pictures(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_pictures(&self, filter: &PictureFilter) -> Result<u64> {
        count_pictures(&mut self.conn.borrow_mut(), filter)
    }

    fn load_preview_picture_of_toilet(&self, toilet_id: &str) -> Result<Option<Picture>> {
        load_preview_picture_of_toilet(&mut self.conn.borrow_mut(), toilet_id)
    }
}

fn filtered_pictures<'a>(filter: &PictureFilter) -> schema::pictures::BoxedQuery<'a, Sqlite> {
    use schema::pictures::dsl;
    let mut query = dsl::pictures
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(toilet_id) = &filter.toilet_id {
        query = query.filter(dsl::toilet_id.eq(toilet_id.to_string()));
    }
    query
}

fn create_picture(conn: &mut SqliteConnection, picture: &Picture) -> Result<()> {
    let new_picture = models::NewPicture::from(picture);
    diesel::insert_into(schema::pictures::table)
        .values(&new_picture)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_picture(conn: &mut SqliteConnection, picture: &Picture) -> Result<()> {
    use schema::pictures::dsl;
    let models::NewPicture {
        id,
        toilet_id,
        name,
        url,
        updated_at,
        deleted_at,
        ..
    } = models::NewPicture::from(picture);
    let count = diesel::update(dsl::pictures.filter(dsl::id.eq(id)))
        .set((
            dsl::toilet_id.eq(toilet_id),
            dsl::name.eq(name),
            dsl::url.eq(url),
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

fn get_picture(conn: &mut SqliteConnection, id: &str) -> Result<Picture> {
    use schema::pictures::dsl;
    Ok(dsl::pictures
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::PictureEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_pictures(
    conn: &mut SqliteConnection,
    filter: &PictureFilter,
    pagination: &Pagination,
) -> Result<Vec<Picture>> {
    let mut query = filtered_pictures(filter);
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::PictureEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_pictures(conn: &mut SqliteConnection, filter: &PictureFilter) -> Result<u64> {
    use schema::pictures::dsl;
    let mut query = dsl::pictures
        .select(diesel::dsl::count_star())
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(toilet_id) = &filter.toilet_id {
        query = query.filter(dsl::toilet_id.eq(toilet_id.to_string()));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}

fn load_preview_picture_of_toilet(
    conn: &mut SqliteConnection,
    toilet_id: &str,
) -> Result<Option<Picture>> {
    use schema::pictures::dsl;
    Ok(dsl::pictures
        .filter(dsl::toilet_id.eq(toilet_id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::PictureEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
