//! Email value object

use std::fmt;

use crate::shared::types::errors::{DomainError, DomainResult};

/// Validated, normalized email address.
///
/// Normalization trims surrounding whitespace and lower-cases the value,
/// so two addresses entered with different casing compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and normalize a raw email string.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let value = raw.trim().to_lowercase();

        if !Self::is_valid(&value) {
            return Err(DomainError::InvalidFormat("Invalid email format".into()));
        }

        Ok(Self(value))
    }

    // local@domain.tld: non-empty chunks free of whitespace and '@',
    // with a dot somewhere in the domain part.
    fn is_valid(value: &str) -> bool {
        let chunk_ok =
            |s: &str| !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@');

        match value.split_once('@') {
            Some((local, domain)) => match domain.rsplit_once('.') {
                Some((name, tld)) => chunk_ok(local) && chunk_ok(name) && chunk_ok(tld),
                None => false,
            },
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
