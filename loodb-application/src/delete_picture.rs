use super::*;

pub fn delete_picture(connections: &sqlite::Connections, id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_picture(conn, id))?;
    Ok(())
}
