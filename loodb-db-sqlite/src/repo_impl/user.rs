use diesel::sqlite::Sqlite;

use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self, filter: &UserFilter, pagination: &Pagination) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_users(&self, filter: &UserFilter) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), filter)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self, filter: &UserFilter, pagination: &Pagination) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_users(&self, filter: &UserFilter) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), filter)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self, filter: &UserFilter, pagination: &Pagination) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn count_users(&self, filter: &UserFilter) -> Result<u64> {
        count_users(&mut self.conn.borrow_mut(), filter)
    }
}

fn filtered_users<'a>(filter: &UserFilter) -> schema::users::BoxedQuery<'a, Sqlite> {
    use schema::users::dsl;
    let mut query = dsl::users.filter(dsl::deleted_at.is_null()).into_boxed();
    if let Some(role) = filter.role {
        query = query.filter(dsl::role.eq(RolePrimitive::from(role)));
    }
    if let Some(email) = &filter.email {
        query = query.filter(dsl::email.eq(email.as_str().to_owned()));
    }
    query
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    let new_user = models::NewUser::from(user);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    use schema::users::dsl;
    let models::NewUser {
        id,
        name,
        email,
        password,
        image,
        role,
        updated_at,
        deleted_at,
        ..
    } = models::NewUser::from(user);
    let count = diesel::update(dsl::users.filter(dsl::id.eq(id)))
        .set((
            dsl::name.eq(name),
            dsl::email.eq(email),
            dsl::password.eq(password),
            dsl::image.eq(image),
            dsl::role.eq(role),
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

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(entity)
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .filter(dsl::deleted_at.is_null())
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn all_users(
    conn: &mut SqliteConnection,
    filter: &UserFilter,
    pagination: &Pagination,
) -> Result<Vec<User>> {
    use schema::users::dsl;
    let mut query = filtered_users(filter).order(dsl::created_at.desc());
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    query
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn count_users(conn: &mut SqliteConnection, filter: &UserFilter) -> Result<u64> {
    use schema::users::dsl;
    let mut query = dsl::users
        .select(diesel::dsl::count_star())
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    if let Some(role) = filter.role {
        query = query.filter(dsl::role.eq(RolePrimitive::from(role)));
    }
    if let Some(email) = &filter.email {
        query = query.filter(dsl::email.eq(email.as_str().to_owned()));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}
