use std::cell::RefCell;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository implementation for unit tests.
#[derive(Debug, Default)]
pub struct MockDb {
    pub toilets: RefCell<Vec<Toilet>>,
    pub reviews: RefCell<Vec<Review>>,
    pub pictures: RefCell<Vec<Picture>>,
    pub users: RefCell<Vec<User>>,
}

fn paginate<T>(mut items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    if offset > 0 {
        items.drain(..offset.min(items.len()));
    }
    if let Some(limit) = pagination.limit {
        items.truncate(limit as usize);
    }
    items
}

impl ToiletRepo for MockDb {
    fn create_toilet(&self, toilet: &Toilet) -> RepoResult<()> {
        let mut toilets = self.toilets.borrow_mut();
        if toilets.iter().any(|t| t.id == toilet.id) {
            return Err(RepoError::AlreadyExists);
        }
        toilets.push(toilet.clone());
        Ok(())
    }

    fn update_toilet(&self, toilet: &Toilet) -> RepoResult<()> {
        let mut toilets = self.toilets.borrow_mut();
        let existing = toilets
            .iter_mut()
            .find(|t| t.id == toilet.id)
            .ok_or(RepoError::NotFound)?;
        *existing = toilet.clone();
        Ok(())
    }

    fn get_toilet(&self, id: &str) -> RepoResult<Toilet> {
        self.toilets
            .borrow()
            .iter()
            .find(|t| t.id.as_str() == id && t.exists())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_toilets(
        &self,
        filter: &ToiletFilter,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Toilet>> {
        let toilets: Vec<_> = self
            .toilets
            .borrow()
            .iter()
            .filter(|t| t.exists() && filter.matches(t))
            .cloned()
            .collect();
        Ok(paginate(toilets, pagination))
    }

    fn count_toilets(&self, filter: &ToiletFilter) -> RepoResult<u64> {
        Ok(self.all_toilets(filter, &Pagination::default())?.len() as u64)
    }
}

fn review_matches(review: &Review, filter: &ReviewFilter) -> bool {
    review.exists()
        && filter
            .toilet_id
            .as_ref()
            .map_or(true, |id| review.toilet_id == *id)
        && filter
            .user_id
            .as_ref()
            .map_or(true, |id| review.user_id == *id)
        && filter
            .min_rating
            .map_or(true, |min| review.rating >= min)
        && filter.comment_contains.as_ref().map_or(true, |text| {
            review
                .comment
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&text.to_lowercase()))
        })
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|r| r.id == review.id) {
            return Err(RepoError::AlreadyExists);
        }
        reviews.push(review.clone());
        Ok(())
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let existing = reviews
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or(RepoError::NotFound)?;
        *existing = review.clone();
        Ok(())
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id && r.exists())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_reviews(
        &self,
        filter: &ReviewFilter,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| review_matches(r, filter))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(reviews, pagination))
    }

    fn count_reviews(&self, filter: &ReviewFilter) -> RepoResult<u64> {
        Ok(self.all_reviews(filter, &Pagination::default())?.len() as u64)
    }

    fn try_get_review_of_user_for_toilet(
        &self,
        user_id: &str,
        toilet_id: &str,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| {
                r.exists() && r.user_id.as_str() == user_id && r.toilet_id.as_str() == toilet_id
            })
            .cloned())
    }

    fn load_ratings_of_toilet(&self, toilet_id: &str) -> RepoResult<Vec<RatingValue>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.exists() && r.toilet_id.as_str() == toilet_id)
            .map(|r| r.rating)
            .collect())
    }

    fn load_all_ratings(&self) -> RepoResult<Vec<RatingValue>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.exists())
            .map(|r| r.rating)
            .collect())
    }
}

impl PictureRepo for MockDb {
    fn create_picture(&self, picture: &Picture) -> RepoResult<()> {
        let mut pictures = self.pictures.borrow_mut();
        if pictures.iter().any(|p| p.id == picture.id) {
            return Err(RepoError::AlreadyExists);
        }
        pictures.push(picture.clone());
        Ok(())
    }

    fn update_picture(&self, picture: &Picture) -> RepoResult<()> {
        let mut pictures = self.pictures.borrow_mut();
        let existing = pictures
            .iter_mut()
            .find(|p| p.id == picture.id)
            .ok_or(RepoError::NotFound)?;
        *existing = picture.clone();
        Ok(())
    }

    fn get_picture(&self, id: &str) -> RepoResult<Picture> {
        self.pictures
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id && p.exists())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_pictures(
        &self,
        filter: &PictureFilter,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Picture>> {
        let pictures: Vec<_> = self
            .pictures
            .borrow()
            .iter()
            .filter(|p| {
                p.exists()
                    && filter
                        .toilet_id
                        .as_ref()
                        .map_or(true, |id| p.toilet_id.as_ref() == Some(id))
            })
            .cloned()
            .collect();
        Ok(paginate(pictures, pagination))
    }

    fn count_pictures(&self, filter: &PictureFilter) -> RepoResult<u64> {
        Ok(self.all_pictures(filter, &Pagination::default())?.len() as u64)
    }

    fn load_preview_picture_of_toilet(&self, toilet_id: &str) -> RepoResult<Option<Picture>> {
        Ok(self
            .pictures
            .borrow()
            .iter()
            .find(|p| p.exists() && p.toilet_id.as_ref().map(Id::as_str) == Some(toilet_id))
            .cloned())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.id == user.id || u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id && u.exists())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.exists() && u.email == *email)
            .cloned())
    }

    fn all_users(&self, filter: &UserFilter, pagination: &Pagination) -> RepoResult<Vec<User>> {
        let users: Vec<_> = self
            .users
            .borrow()
            .iter()
            .filter(|u| {
                u.exists()
                    && filter.role.map_or(true, |role| u.role == role)
                    && filter.email.as_ref().map_or(true, |email| u.email == *email)
            })
            .cloned()
            .collect();
        Ok(paginate(users, pagination))
    }

    fn count_users(&self, filter: &UserFilter) -> RepoResult<u64> {
        Ok(self.all_users(filter, &Pagination::default())?.len() as u64)
    }
}
