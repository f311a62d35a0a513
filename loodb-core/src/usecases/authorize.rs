use super::prelude::*;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = repo.try_get_user_by_email(email)? {
        return authorize_role(&user, min_required_role).map(|()| user);
    }
    Err(Error::Unauthorized)
}
