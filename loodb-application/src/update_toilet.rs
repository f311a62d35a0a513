use super::*;

pub fn update_toilet(
    connections: &sqlite::Connections,
    id: &Id,
    update: usecases::UpdateToilet,
) -> Result<Toilet> {
    let mut connection = connections.exclusive()?;
    let toilet = connection.transaction(|conn| usecases::update_toilet(conn, id, update))?;
    Ok(toilet)
}
