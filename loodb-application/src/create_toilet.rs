use super::*;

pub fn create_toilet(
    connections: &sqlite::Connections,
    new_toilet: usecases::NewToilet,
) -> Result<Toilet> {
    let mut connection = connections.exclusive()?;
    let toilet = connection.transaction(|conn| usecases::create_toilet(conn, new_toilet))?;
    info!("Created toilet {} at {}", toilet.id, toilet.pos);
    Ok(toilet)
}
