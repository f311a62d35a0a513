use super::prelude::*;

const TOP_RATED_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TopRatedToilet {
    pub toilet: Toilet,
    pub avg_rating: AvgRating,
    pub review_count: u64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_toilets    : u64,
    pub verified_toilets : u64,
    pub free_toilets     : u64,
    pub public_toilets   : u64,
    pub handicap_toilets : u64,
    pub commerce_toilets : u64,
    pub total_reviews    : u64,
    pub avg_rating       : Option<AvgRating>,
    pub total_users      : u64,
    pub total_pictures   : u64,
    pub top_rated        : Vec<TopRatedToilet>,
}

pub fn gather_stats<R>(repo: &R) -> Result<Stats>
where
    R: ToiletRepo + ReviewRepo + PictureRepo + UserRepo,
{
    let count_with = |filter: ToiletFilter| repo.count_toilets(&filter);
    let total_toilets = count_with(Default::default())?;
    let verified_toilets = count_with(ToiletFilter {
        verified: Some(true),
        ..Default::default()
    })?;
    let free_toilets = count_with(ToiletFilter {
        free: Some(true),
        ..Default::default()
    })?;
    let public_toilets = count_with(ToiletFilter {
        public: Some(true),
        ..Default::default()
    })?;
    let handicap_toilets = count_with(ToiletFilter {
        handicap: Some(true),
        ..Default::default()
    })?;
    let commerce_toilets = count_with(ToiletFilter {
        commerce: Some(true),
        ..Default::default()
    })?;

    let all_ratings = repo.load_all_ratings()?;
    let total_reviews = all_ratings.len() as u64;
    let avg_rating = AvgRating::of(&all_ratings);

    let total_users = repo.count_users(&Default::default())?;
    let total_pictures = repo.count_pictures(&Default::default())?;

    let mut top_rated = Vec::new();
    for toilet in repo.all_toilets(&Default::default(), &Pagination::default())? {
        let ratings = repo.load_ratings_of_toilet(toilet.id.as_str())?;
        if let Some(avg_rating) = AvgRating::of(&ratings) {
            top_rated.push(TopRatedToilet {
                toilet,
                avg_rating,
                review_count: ratings.len() as u64,
            });
        }
    }
    top_rated.sort_by(|a, b| {
        b.avg_rating
            .partial_cmp(&a.avg_rating)
            .expect("valid average ratings")
    });
    top_rated.truncate(TOP_RATED_COUNT);

    Ok(Stats {
        total_toilets,
        verified_toilets,
        free_toilets,
        public_toilets,
        handicap_toilets,
        commerce_toilets,
        total_reviews,
        avg_rating,
        total_users,
        total_pictures,
        top_rated,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn gather_stats_over_mixed_data() {
        let db = MockDb::default();
        db.toilets.borrow_mut().push(
            Toilet::build()
                .id("a")
                .free(true)
                .verified(true)
                .finish(),
        );
        db.toilets.borrow_mut().push(Toilet::build().id("b").finish());
        db.toilets
            .borrow_mut()
            .push(Toilet::build().id("deleted").deleted().finish());
        db.reviews
            .borrow_mut()
            .push(Review::build().toilet_id("a").rating(5).finish());
        db.reviews
            .borrow_mut()
            .push(Review::build().toilet_id("b").rating(2).finish());

        let stats = gather_stats(&db).unwrap();
        assert_eq!(2, stats.total_toilets);
        assert_eq!(1, stats.verified_toilets);
        assert_eq!(1, stats.free_toilets);
        assert_eq!(2, stats.total_reviews);
        assert_eq!(Some(3.5), stats.avg_rating.map(f64::from));
        assert_eq!(2, stats.top_rated.len());
        // Best rated first
        assert_eq!("a", stats.top_rated[0].toilet.id.as_str());
    }
}
