use super::prelude::*;

/// Partial update of a toilet.
///
/// The verification flag is deliberately absent: it is only
/// mutated by the dedicated verify/unverify operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateToilet {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub free: Option<bool>,
    pub public: Option<bool>,
    pub handicap: Option<bool>,
    pub commerce: Option<bool>,
}

pub fn update_toilet<R: ToiletRepo>(repo: &R, id: &Id, update: UpdateToilet) -> Result<Toilet> {
    let mut toilet = repo.get_toilet(id.as_str())?;
    let UpdateToilet {
        latitude,
        longitude,
        free,
        public,
        handicap,
        commerce,
    } = update;
    let (old_lat, old_lng) = toilet.pos.to_lat_lng_deg();
    toilet.pos = MapPoint::try_from_lat_lng_deg(
        latitude.unwrap_or(old_lat),
        longitude.unwrap_or(old_lng),
    )?;
    if let Some(free) = free {
        toilet.attributes.free = free;
    }
    if let Some(public) = public {
        toilet.attributes.public = public;
    }
    if let Some(handicap) = handicap {
        toilet.attributes.handicap = handicap;
    }
    if let Some(commerce) = commerce {
        toilet.attributes.commerce = commerce;
    }
    toilet.updated_at = Some(Timestamp::now());
    repo.update_toilet(&toilet)?;
    Ok(toilet)
}
