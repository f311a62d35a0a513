//! Convenience builders for creating test data.

use crate::{email::*, geo::*, id::*, password::*, picture::*, review::*, time::*, toilet::*, user::*};

#[derive(Debug)]
pub struct ToiletBuilder {
    toilet: Toilet,
}

impl Toilet {
    pub fn build() -> ToiletBuilder {
        ToiletBuilder {
            toilet: Toilet {
                id: Id::new(),
                pos: MapPoint::default(),
                attributes: ToiletAttributes::default(),
                verified: false,
                created_at: Timestamp::now(),
                updated_at: None,
                deleted_at: None,
            },
        }
    }
}

impl ToiletBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.toilet.id = id.into();
        self
    }

    pub fn pos(mut self, lat: f64, lng: f64) -> Self {
        self.toilet.pos = MapPoint::from_lat_lng_deg(lat, lng);
        self
    }

    pub fn free(mut self, free: bool) -> Self {
        self.toilet.attributes.free = free;
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.toilet.attributes.public = public;
        self
    }

    pub fn handicap(mut self, handicap: bool) -> Self {
        self.toilet.attributes.handicap = handicap;
        self
    }

    pub fn commerce(mut self, commerce: bool) -> Self {
        self.toilet.attributes.commerce = commerce;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.toilet.verified = verified;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.toilet.deleted_at = Some(Timestamp::now());
        self
    }

    pub fn finish(self) -> Toilet {
        self.toilet
    }
}

#[derive(Debug)]
pub struct ReviewBuilder {
    review: Review,
}

impl Review {
    pub fn build() -> ReviewBuilder {
        ReviewBuilder {
            review: Review {
                id: Id::new(),
                toilet_id: Id::new(),
                user_id: Id::new(),
                rating: RatingValue::max(),
                comment: None,
                created_at: Timestamp::now(),
                updated_at: None,
                deleted_at: None,
            },
        }
    }
}

impl ReviewBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.review.id = id.into();
        self
    }

    pub fn toilet_id(mut self, id: &str) -> Self {
        self.review.toilet_id = id.into();
        self
    }

    pub fn user_id(mut self, id: &str) -> Self {
        self.review.user_id = id.into();
        self
    }

    pub fn rating(mut self, rating: i8) -> Self {
        self.review.rating = RatingValue::new(rating);
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.review.comment = Some(comment.to_owned());
        self
    }

    pub fn finish(self) -> Review {
        self.review
    }
}

#[derive(Debug)]
pub struct UserBuilder {
    user: User,
}

impl User {
    pub fn build() -> UserBuilder {
        UserBuilder {
            user: User {
                id: Id::new(),
                name: "anonymous".into(),
                email: EmailAddress::new_unchecked("anonymous@example.com".into()),
                password: Password::from_hash(String::new()),
                image: None,
                role: Role::default(),
                created_at: Timestamp::now(),
                updated_at: None,
                deleted_at: None,
            },
        }
    }
}

impl UserBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.user.id = id.into();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.user.name = name.to_owned();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.user.email = EmailAddress::new_unchecked(email.to_owned());
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.user.password = password.parse().unwrap();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.user.role = role;
        self
    }

    pub fn finish(self) -> User {
        self.user
    }
}

#[derive(Debug)]
pub struct PictureBuilder {
    picture: Picture,
}

impl Picture {
    pub fn build() -> PictureBuilder {
        PictureBuilder {
            picture: Picture {
                id: Id::new(),
                toilet_id: None,
                name: None,
                url: "https://example.com/picture.jpg".into(),
                created_at: Timestamp::now(),
                updated_at: None,
                deleted_at: None,
            },
        }
    }
}

impl PictureBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.picture.id = id.into();
        self
    }

    pub fn toilet_id(mut self, id: &str) -> Self {
        self.picture.toilet_id = Some(id.into());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.picture.url = url.to_owned();
        self
    }

    pub fn finish(self) -> Picture {
        self.picture
    }
}
