use std::{fmt, str::FromStr};

use thiserror::Error;

/// A syntactically plausible e-mail address.
///
/// Only the basic structure is checked here. Full validation
/// is part of the registration use case.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl EmailAddress {
    pub fn new_unchecked(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(from: EmailAddress) -> Self {
        from.0
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(2, '@');
        match (parts.next(), parts.next()) {
            (Some(local), Some(domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(EmailAddressParseError),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
