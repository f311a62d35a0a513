use super::prelude::*;

/// Result of a verify/unverify operation.
///
/// Requesting the state a toilet is already in is not an
/// error, but reported back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyOutcome {
    pub toilet: Toilet,
    pub changed: bool,
}

pub fn verify_toilet<R: ToiletRepo>(repo: &R, id: &Id) -> Result<VerifyOutcome> {
    set_verified(repo, id, true)
}

pub fn unverify_toilet<R: ToiletRepo>(repo: &R, id: &Id) -> Result<VerifyOutcome> {
    set_verified(repo, id, false)
}

fn set_verified<R: ToiletRepo>(repo: &R, id: &Id, verified: bool) -> Result<VerifyOutcome> {
    let mut toilet = repo.get_toilet(id.as_str())?;
    if toilet.verified == verified {
        return Ok(VerifyOutcome {
            toilet,
            changed: false,
        });
    }
    toilet.verified = verified;
    toilet.updated_at = Some(Timestamp::now());
    repo.update_toilet(&toilet)?;
    Ok(VerifyOutcome {
        toilet,
        changed: true,
    })
}
