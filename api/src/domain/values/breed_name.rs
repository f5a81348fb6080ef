//! Breed name value type

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::ValidationError;

/// Lowercase tokens joined by single underscores
pub const BREED_NAME_PATTERN: &str = r"^[a-z]+(_[a-z]+)*$";

pub const MIN_BREED_NAME_LENGTH: usize = 2;
pub const MAX_BREED_NAME_LENGTH: usize = 255;

static BREED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(BREED_NAME_PATTERN).unwrap());

/// Name of a breed, also its identity in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BreedName(String);

impl BreedName {
    /// Validate and wrap a raw name
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        Ok(Self(raw))
    }

    /// Check a raw name without taking ownership.
    ///
    /// Length is checked before the pattern: too short, then too long, then pattern.
    pub fn validate(raw: &str) -> Result<(), ValidationError> {
        let len = raw.len();

        if len < MIN_BREED_NAME_LENGTH {
            return Err(ValidationError::NameTooShort);
        }
        if len > MAX_BREED_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }
        if !BREED_NAME_REGEX.is_match(raw) {
            return Err(ValidationError::NameInvalid);
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BreedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BreedName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl std::str::FromStr for BreedName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BreedName> for String {
    fn from(name: BreedName) -> Self {
        name.0
    }
}

impl fmt::Display for BreedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
