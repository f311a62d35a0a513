use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewToilet {
    pub latitude: f64,
    pub longitude: f64,
    pub free: bool,
    pub public: bool,
    pub handicap: bool,
    pub commerce: bool,
}

pub fn create_toilet<R: ToiletRepo>(repo: &R, new: NewToilet) -> Result<Toilet> {
    let NewToilet {
        latitude,
        longitude,
        free,
        public,
        handicap,
        commerce,
    } = new;
    let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
    let toilet = Toilet {
        id: Id::new(),
        pos,
        attributes: ToiletAttributes {
            free,
            public,
            handicap,
            commerce,
        },
        // New entries are always unverified until confirmed
        // by the dedicated verify operation.
        verified: false,
        created_at: Timestamp::now(),
        updated_at: None,
        deleted_at: None,
    };
    log::debug!("Creating new toilet at {}", toilet.pos);
    repo.create_toilet(&toilet)?;
    Ok(toilet)
}
