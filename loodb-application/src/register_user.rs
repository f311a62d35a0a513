use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let mut connection = connections.exclusive()?;
    let user = connection.transaction(|conn| usecases::create_new_user(conn, new_user))?;
    info!("Registered user {}", user.email);
    Ok(user)
}
