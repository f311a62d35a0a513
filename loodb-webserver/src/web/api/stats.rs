use super::*;

#[get("/stats")]
pub fn get_stats(db: sqlite::Connections) -> Result<json::Stats> {
    let stats = {
        let db = db.shared()?;
        usecases::gather_stats(&db)?
    };
    Ok(Json(to_json::stats(stats)))
}
