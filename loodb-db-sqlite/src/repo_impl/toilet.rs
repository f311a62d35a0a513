use diesel::sqlite::Sqlite;

use super::*;

impl<'a> ToiletRepo for DbReadOnly<'a> {
    fn create_toilet(&self, _toilet: &Toilet) -> Result<()> {
        unreachable!();
    }
    fn update_toilet(&self, _toilet: &Toilet) -> Result<()> {
        unreachable!();
    }

    fn get_toilet(&self, id: &str) -> Result<Toilet> {
        get_toilet(&mut self.conn.borrow_mut(), id)
    }
    fn all_toilets(&self, filter: &ToiletFilter, pagination: &Pagination) -> Result<Vec<Toilet>> {
        all_toilets(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_toilets(&self, filter: &ToiletFilter) -> Result<u64> {
        count_toilets(&mut self.conn.borrow_mut(), filter)
    }
}

impl<'a> ToiletRepo for DbReadWrite<'a> {
    fn create_toilet(&self, toilet: &Toilet) -> Result<()> {
        create_toilet(&mut self.conn.borrow_mut(), toilet)
    }
    fn update_toilet(&self, toilet: &Toilet) -> Result<()> {
        update_toilet(&mut self.conn.borrow_mut(), toilet)
    }

    fn get_toilet(&self, id: &str) -> Result<Toilet> {
        get_toilet(&mut self.conn.borrow_mut(), id)
    }
    fn all_toilets(&self, filter: &ToiletFilter, pagination: &Pagination) -> Result<Vec<Toilet>> {
        all_toilets(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_toilets(&self, filter: &ToiletFilter) -> Result<u64> {
        count_toilets(&mut self.conn.borrow_mut(), filter)
    }
}

impl<'a> ToiletRepo for DbConnection<'a> {
    fn create_toilet(&self, toilet: &Toilet) -> Result<()> {
        create_toilet(&mut self.conn.borrow_mut(), toilet)
    }
    fn update_toilet(&self, toilet: &Toilet) -> Result<()> {
        update_toilet(&mut self.conn.borrow_mut(), toilet)
    }

    fn get_toilet(&self, id: &str) -> Result<Toilet> {
        get_toilet(&mut self.conn.borrow_mut(), id)
    }
    fn all_toilets(&self, filter: &ToiletFilter, pagination: &Pagination) -> Result<Vec<Toilet>> {
        all_toilets(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_toilets(&self, filter: &ToiletFilter) -> Result<u64> {
        count_toilets(&mut self.conn.borrow_mut(), filter)
    }
}

fn filtered_toilets<'a>(filter: &ToiletFilter) -> schema::toilets::BoxedQuery<'a, Sqlite> {
    use schema::toilets::dsl;
    let mut query = dsl::toilets
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(free) = filter.free {
        query = query.filter(dsl::is_free.eq(free));
    }
    if let Some(public) = filter.public {
        query = query.filter(dsl::is_public.eq(public));
    }
    if let Some(handicap) = filter.handicap {
        query = query.filter(dsl::is_handicap.eq(handicap));
    }
    if let Some(commerce) = filter.commerce {
        query = query.filter(dsl::is_commerce.eq(commerce));
    }
    if let Some(verified) = filter.verified {
        query = query.filter(dsl::is_verified.eq(verified));
    }
    query
}

fn create_toilet(conn: &mut SqliteConnection, toilet: &Toilet) -> Result<()> {
    let new_toilet = models::NewToilet::from(toilet);
    diesel::insert_into(schema::toilets::table)
        .values(&new_toilet)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_toilet(conn: &mut SqliteConnection, toilet: &Toilet) -> Result<()> {
    use schema::toilets::dsl;
    let models::NewToilet {
        id,
        latitude,
        longitude,
        is_free,
        is_public,
        is_handicap,
        is_commerce,
        is_verified,
        created_at: _,
        updated_at,
        deleted_at,
    } = models::NewToilet::from(toilet);
    let count = diesel::update(dsl::toilets.filter(dsl::id.eq(id)))
        .set((
            dsl::latitude.eq(latitude),
            dsl::longitude.eq(longitude),
            dsl::is_free.eq(is_free),
            dsl::is_public.eq(is_public),
            dsl::is_handicap.eq(is_handicap),
            dsl::is_commerce.eq(is_commerce),
            dsl::is_verified.eq(is_verified),
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

fn get_toilet(conn: &mut SqliteConnection, id: &str) -> Result<Toilet> {
    use schema::toilets::dsl;
    let entity = dsl::toilets
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::ToiletEntity>(conn)
        .map_err(from_diesel_err)?;
    load_toilet(entity)
}

fn all_toilets(
    conn: &mut SqliteConnection,
    filter: &ToiletFilter,
    pagination: &Pagination,
) -> Result<Vec<Toilet>> {
    let mut query = filtered_toilets(filter);
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    query
        .load::<models::ToiletEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_toilet)
        .collect()
}

fn count_toilets(conn: &mut SqliteConnection, filter: &ToiletFilter) -> Result<u64> {
    use schema::toilets::dsl;
    let mut query = dsl::toilets
        .select(diesel::dsl::count_star())
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(free) = filter.free {
        query = query.filter(dsl::is_free.eq(free));
    }
    if let Some(public) = filter.public {
        query = query.filter(dsl::is_public.eq(public));
    }
    if let Some(handicap) = filter.handicap {
        query = query.filter(dsl::is_handicap.eq(handicap));
    }
    if let Some(commerce) = filter.commerce {
        query = query.filter(dsl::is_commerce.eq(commerce));
    }
    if let Some(verified) = filter.verified {
        query = query.filter(dsl::is_verified.eq(verified));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}
