use super::*;

pub fn create_picture(
    connections: &sqlite::Connections,
    new_picture: usecases::NewPicture,
) -> Result<Picture> {
    let mut connection = connections.exclusive()?;
    let picture = connection.transaction(|conn| usecases::create_picture(conn, new_picture))?;
    Ok(picture)
}
