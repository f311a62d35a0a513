use super::*;

pub fn delete_toilet(connections: &sqlite::Connections, id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_toilet(conn, id))?;
    info!("Deleted toilet {id}");
    Ok(())
}
