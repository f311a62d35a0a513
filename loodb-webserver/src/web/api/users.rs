use rocket::http::SameSite;

use super::*;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::User> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    let user = {
        let credentials = usecases::Credentials {
            email: &email,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {err}", login.email);
            err
        })?
    };
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, String::from(email))).same_site(SameSite::None),
    );
    Ok(Json(user.into()))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = flows::register_user(&db, new_user)?;
    let location = format!("/users/{}", user.id);
    Ok(Created::new(location).body(Json(user.into())))
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let db = db.shared()?;
    let user = db
        .try_get_user_by_email(account.email())?
        .ok_or(ParameterError::Unauthorized)?;
    Ok(Json(user.into()))
}

#[get("/users?<role>&<email>&<limit>&<offset>")]
pub fn get_users(
    db: sqlite::Connections,
    auth: Auth,
    role: Option<String>,
    email: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<json::Paged<json::User>> {
    let role = role
        .map(|role| role.parse::<Role>().map_err(|_| ParameterError::Role))
        .transpose()?;
    let filter = UserFilter {
        role,
        email: email.map(EmailAddress::new_unchecked),
    };
    let pagination = pagination(offset, limit);
    let db = db.shared()?;
    // The user listing is only permitted for admins
    auth.user_with_min_role(&db, Role::Admin)?;
    let total = db.count_users(&filter)?;
    let data = db
        .all_users(&filter, &pagination)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json::Paged {
        data,
        meta: page_meta(total, &pagination),
    }))
}

#[get("/users/<id>", rank = 2)]
pub fn get_user(db: sqlite::Connections, auth: Auth, id: String) -> Result<json::User> {
    let db = db.shared()?;
    let actor = auth.user_with_min_role(&db, Role::User)?;
    let user = usecases::get_user(&db, &actor, &id.into())?;
    Ok(Json(user.into()))
}

#[post("/users/promote", format = "application/json", data = "<user>")]
pub fn post_promote_user(
    db: sqlite::Connections,
    auth: Auth,
    user: JsonResult<json::UserId>,
) -> Result<json::User> {
    change_role(db, auth, user?.into_inner(), Role::Admin)
}

#[post("/users/demote", format = "application/json", data = "<user>")]
pub fn post_demote_user(
    db: sqlite::Connections,
    auth: Auth,
    user: JsonResult<json::UserId>,
) -> Result<json::User> {
    change_role(db, auth, user?.into_inner(), Role::User)
}

fn change_role(
    db: sqlite::Connections,
    auth: Auth,
    user: json::UserId,
    new_role: Role,
) -> Result<json::User> {
    let actor = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::Admin).map_err(|err| {
            debug!("Unauthorized user: {err}");
            err
        })?
    };
    let user = flows::change_user_role(&db, &actor, &user.id.into(), new_role)?;
    Ok(Json(user.into()))
}

#[delete("/users/<id>")]
pub fn delete_user(db: sqlite::Connections, auth: Auth, id: String) -> Result<()> {
    let actor = {
        let db = db.shared()?;
        auth.user_with_min_role(&db, Role::User)?
    };
    flows::delete_user(&db, &actor, &id.into())?;
    Ok(Json(()))
}
