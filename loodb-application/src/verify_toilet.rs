use super::*;

pub fn verify_toilet(
    connections: &sqlite::Connections,
    id: &Id,
) -> Result<usecases::VerifyOutcome> {
    let mut connection = connections.exclusive()?;
    let outcome = connection.transaction(|conn| usecases::verify_toilet(conn, id))?;
    if outcome.changed {
        info!("Verified toilet {id}");
    }
    Ok(outcome)
}

pub fn unverify_toilet(
    connections: &sqlite::Connections,
    id: &Id,
) -> Result<usecases::VerifyOutcome> {
    let mut connection = connections.exclusive()?;
    let outcome = connection.transaction(|conn| usecases::unverify_toilet(conn, id))?;
    if outcome.changed {
        info!("Unverified toilet {id}");
    }
    Ok(outcome)
}
