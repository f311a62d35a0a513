use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A salted hash of a user password.
///
/// The clear text is dropped when parsing and can only
/// be checked against the hash afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn to_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.trim().len() < Self::min_len() {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(password).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = "secret".parse::<Password>().unwrap();
        assert!(password.verify("secret"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn reject_short_passwords() {
        assert_eq!(Err(ParseError), "12345".parse::<Password>());
        assert_eq!(Err(ParseError), "     ".parse::<Password>());
    }
}
