pub use loodb_boundary::*;

use loodb_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_toilet(t: NewToilet) -> usecases::NewToilet {
        let NewToilet {
            latitude,
            longitude,
            is_free,
            is_public,
            is_handicap,
            is_commerce,
        } = t;
        usecases::NewToilet {
            latitude,
            longitude,
            free: is_free,
            public: is_public,
            handicap: is_handicap,
            commerce: is_commerce,
        }
    }

    pub fn update_toilet(t: UpdateToilet) -> usecases::UpdateToilet {
        let UpdateToilet {
            latitude,
            longitude,
            is_free,
            is_public,
            is_handicap,
            is_commerce,
        } = t;
        usecases::UpdateToilet {
            latitude,
            longitude,
            free: is_free,
            public: is_public,
            handicap: is_handicap,
            commerce: is_commerce,
        }
    }

    pub fn new_review(r: NewReview, user_id: e::Id) -> usecases::NewReview {
        let NewReview {
            toilet_id,
            rating,
            comment,
        } = r;
        usecases::NewReview {
            toilet_id: toilet_id.into(),
            user_id,
            rating,
            comment,
        }
    }

    pub fn new_picture(p: NewPicture) -> usecases::NewPicture {
        let NewPicture {
            toilet_id,
            name,
            url,
        } = p;
        usecases::NewPicture {
            toilet_id: toilet_id.map(Into::into),
            name,
            url,
        }
    }

    pub fn try_new_user(u: NewUser) -> Result<usecases::NewUser, e::EmailAddressParseError> {
        let NewUser {
            name,
            email,
            password,
            image,
        } = u;
        Ok(usecases::NewUser {
            name,
            email: email.parse()?,
            password,
            image,
        })
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn toilet_details(
        toilet: e::Toilet,
        reviews: Vec<(e::Review, Option<e::User>)>,
        pictures: Vec<e::Picture>,
    ) -> ToiletDetails {
        let ratings: Vec<_> = reviews.iter().map(|(review, _)| review.rating).collect();
        let Toilet {
            id,
            latitude,
            longitude,
            is_free,
            is_public,
            is_handicap,
            is_commerce,
            is_verified,
            created_at,
            updated_at,
        } = toilet.into();
        ToiletDetails {
            id,
            latitude,
            longitude,
            is_free,
            is_public,
            is_handicap,
            is_commerce,
            is_verified,
            created_at,
            updated_at,
            avg_rating: e::AvgRating::of(&ratings).map(Into::into),
            review_count: ratings.len() as u64,
            reviews: reviews
                .into_iter()
                .map(|(review, user)| review_with_user(review, user))
                .collect(),
            pictures: pictures.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stats(from: usecases::Stats) -> Stats {
        let usecases::Stats {
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
        } = from;
        Stats {
            total_toilets,
            verified_toilets,
            free_toilets,
            public_toilets,
            handicap_toilets,
            commerce_toilets,
            total_reviews,
            avg_rating: avg_rating.map(Into::into),
            total_users,
            total_pictures,
            top_rated: top_rated
                .into_iter()
                .map(|top| TopRatedToilet {
                    toilet: top.toilet.into(),
                    avg_rating: top.avg_rating.into(),
                    review_count: top.review_count,
                })
                .collect(),
        }
    }
}
