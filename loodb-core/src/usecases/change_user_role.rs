use super::prelude::*;

pub fn change_user_role<R: UserRepo>(
    repo: &R,
    actor: &User,
    user_id: &Id,
    new_role: Role,
) -> Result<User> {
    if actor.role < Role::Admin {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user_id.as_str())?;
    if user.role != new_role {
        log::info!("Changing role of user {} to {}", user.id, new_role);
        user.role = new_role;
        user.updated_at = Some(Timestamp::now());
        repo.update_user(&user)?;
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn promote_and_demote() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id("u").finish());
        let admin = User::build().id("a").role(Role::Admin).finish();

        let promoted = change_user_role(&db, &admin, &"u".into(), Role::Admin).unwrap();
        assert_eq!(Role::Admin, promoted.role);
        let demoted = change_user_role(&db, &admin, &"u".into(), Role::User).unwrap();
        assert_eq!(Role::User, demoted.role);
    }

    #[test]
    fn non_admins_are_rejected() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id("u").finish());
        let actor = User::build().id("x").finish();
        assert!(matches!(
            change_user_role(&db, &actor, &"u".into(), Role::Admin),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn unknown_user_is_not_found() {
        let db = MockDb::default();
        let admin = User::build().role(Role::Admin).finish();
        assert!(matches!(
            change_user_role(&db, &admin, &"u".into(), Role::Admin),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
