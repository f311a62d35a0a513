use super::*;

pub fn change_user_role(
    connections: &sqlite::Connections,
    actor: &User,
    user_id: &Id,
    new_role: Role,
) -> Result<User> {
    let mut connection = connections.exclusive()?;
    let user =
        connection.transaction(|conn| usecases::change_user_role(conn, actor, user_id, new_role))?;
    Ok(user)
}
