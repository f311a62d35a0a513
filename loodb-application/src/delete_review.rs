use super::*;

pub fn delete_review(connections: &sqlite::Connections, actor: &User, id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_review(conn, actor, id))?;
    Ok(())
}
