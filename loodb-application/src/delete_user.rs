use super::*;

pub fn delete_user(connections: &sqlite::Connections, actor: &User, user_id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_user(conn, actor, user_id))?;
    Ok(())
}
