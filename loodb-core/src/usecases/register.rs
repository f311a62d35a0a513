use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
    pub image: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::Email);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        name: u.name,
        email: u.email,
        password,
        image: u.image,
        role: Role::User,
        created_at: Timestamp::now(),
        updated_at: None,
        deleted_at: None,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "foo".into(),
            email: email.parse().unwrap(),
            password: "secret1".into(),
            image: None,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de")).is_ok());
        assert!(create_new_user(&db, new_user("baz@bar.de")).is_ok());
        assert_eq!(2, db.users.borrow().len());
    }

    #[test]
    fn reject_duplicate_email() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("foo@bar.de")).is_ok());
        assert!(matches!(
            create_new_user(&db, new_user("foo@bar.de")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn reject_invalid_email() {
        let db = MockDb::default();
        let u = NewUser {
            email: EmailAddress::new_unchecked("foo@bar@baz".into()),
            ..new_user("foo@bar.de")
        };
        assert!(matches!(create_new_user(&db, u), Err(Error::Email)));
    }

    #[test]
    fn reject_short_password() {
        let db = MockDb::default();
        let u = NewUser {
            password: "123".into(),
            ..new_user("foo@bar.de")
        };
        assert!(matches!(create_new_user(&db, u), Err(Error::Password)));
    }
}
