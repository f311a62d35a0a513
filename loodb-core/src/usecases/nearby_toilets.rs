use super::prelude::*;

pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub center: MapPoint,
    pub radius: Distance,
    pub limit: usize,
}

impl NearbyQuery {
    pub fn try_new(
        lat: f64,
        lng: f64,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Self> {
        let center = MapPoint::try_from_lat_lng_deg(lat, lng)?;
        let radius = Distance::from_kilometers(radius_km.unwrap_or(DEFAULT_RADIUS_KM));
        if !radius.is_valid() {
            return Err(Error::InvalidPosition);
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(Error::InvalidLimit);
        }
        Ok(Self {
            center,
            radius,
            limit,
        })
    }
}

/// Distances of all candidates to the center, within the radius,
/// in ascending order and capped at the query limit.
///
/// The distance of each candidate is computed pairwise with the
/// Haversine formula, without any spatial pre-filtering. This full
/// scan is acceptable as long as the candidate set stays small.
pub fn toilets_within_radius(query: &NearbyQuery, candidates: Vec<Toilet>) -> Vec<(Toilet, Distance)> {
    let mut results: Vec<_> = candidates
        .into_iter()
        .map(|toilet| {
            let distance = MapPoint::distance(query.center, toilet.pos);
            (toilet, distance)
        })
        .filter(|(_, distance)| *distance <= query.radius)
        .collect();
    // Raw float comparison, no rounding. Equal distances keep
    // their candidate order (stable sort, no tie-break).
    results.sort_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).expect("valid distances"));
    results.truncate(query.limit);
    results
}

/// The single closest candidate, or `None` for an empty set.
/// The first minimum wins when distances are equal.
pub fn nearest_toilet(center: MapPoint, candidates: Vec<Toilet>) -> Option<(Toilet, Distance)> {
    let mut nearest: Option<(Toilet, Distance)> = None;
    for toilet in candidates {
        let distance = MapPoint::distance(center, toilet.pos);
        match &nearest {
            Some((_, min_distance)) if distance >= *min_distance => (),
            _ => nearest = Some((toilet, distance)),
        }
    }
    nearest
}

pub fn nearby_toilets<R>(
    repo: &R,
    filter: &ToiletFilter,
    query: &NearbyQuery,
) -> Result<Vec<(Toilet, Distance)>>
where
    R: ToiletRepo,
{
    // The attribute pre-filter is applied by the repository,
    // the distance filter operates on the full candidate set.
    let candidates = repo.all_toilets(filter, &Pagination::default())?;
    Ok(toilets_within_radius(query, candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: f64, lng: f64, radius_km: f64, limit: usize) -> NearbyQuery {
        NearbyQuery {
            center: MapPoint::from_lat_lng_deg(lat, lng),
            radius: Distance::from_kilometers(radius_km),
            limit,
        }
    }

    #[test]
    fn reject_invalid_coordinates() {
        assert!(matches!(
            NearbyQuery::try_new(200.0, 0.0, None, None),
            Err(Error::InvalidPosition)
        ));
        assert!(matches!(
            NearbyQuery::try_new(0.0, -200.0, None, None),
            Err(Error::InvalidPosition)
        ));
        assert!(matches!(
            NearbyQuery::try_new(0.0, f64::NAN, None, None),
            Err(Error::InvalidPosition)
        ));
    }

    #[test]
    fn apply_defaults() {
        let query = NearbyQuery::try_new(48.0, 2.0, None, None).unwrap();
        assert_eq!(Distance::from_kilometers(DEFAULT_RADIUS_KM), query.radius);
        assert_eq!(DEFAULT_LIMIT, query.limit);
    }

    #[test]
    fn within_radius_ascending_and_limited() {
        let candidates = vec![
            Toilet::build().id("far").pos(48.9, 2.5).finish(),
            Toilet::build().id("near").pos(48.8567, 2.3523).finish(),
            Toilet::build().id("out-of-range").pos(43.6043, 1.4437).finish(),
            Toilet::build().id("close").pos(48.86, 2.36).finish(),
        ];
        let query = query(48.8566, 2.3522, 20.0, 10);
        let results = toilets_within_radius(&query, candidates);
        let ids: Vec<_> = results.iter().map(|(t, _)| t.id.as_str()).collect();
        assert_eq!(vec!["near", "close", "far"], ids);
        for (_, distance) in &results {
            assert!(*distance <= query.radius);
        }
        let mut sorted = results.clone();
        sorted.sort_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap());
        assert_eq!(sorted, results);

        let query = NearbyQuery { limit: 2, ..query };
        let results = toilets_within_radius(
            &query,
            vec![
                Toilet::build().id("a").pos(48.86, 2.36).finish(),
                Toilet::build().id("b").pos(48.87, 2.37).finish(),
                Toilet::build().id("c").pos(48.88, 2.38).finish(),
            ],
        );
        assert_eq!(2, results.len());
    }

    #[test]
    fn zero_distance_candidate() {
        let query = query(48.8566, 2.3522, 1.0, 10);
        let results = toilets_within_radius(
            &query,
            vec![Toilet::build().id("here").pos(48.8566, 2.3522).finish()],
        );
        assert_eq!(1, results.len());
        assert_eq!(0.0, results[0].1.to_kilometers());
    }

    #[test]
    fn nearest_of_empty_set() {
        let center = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(None, nearest_toilet(center, vec![]));
    }

    #[test]
    fn nearest_of_singleton_set() {
        let center = MapPoint::from_lat_lng_deg(48.8566, 2.3522);
        let toilet = Toilet::build().id("only").pos(48.8566, 2.3522).finish();
        let (nearest, distance) = nearest_toilet(center, vec![toilet]).unwrap();
        assert_eq!("only", nearest.id.as_str());
        assert_eq!(0.0, distance.to_kilometers());
    }

    #[test]
    fn nearest_first_minimum_wins() {
        let center = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let candidates = vec![
            Toilet::build().id("first").pos(1.0, 0.0).finish(),
            Toilet::build().id("second").pos(-1.0, 0.0).finish(),
        ];
        let (nearest, _) = nearest_toilet(center, candidates).unwrap();
        assert_eq!("first", nearest.id.as_str());
    }
}
