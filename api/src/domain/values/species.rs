//! Species value type

use std::fmt;

use serde::Serialize;

use super::ValidationError;

/// Animal species a breed belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Species {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or(ValidationError::InvalidSpecies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_from_str_ignores_case() {
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("CAT".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("Dog".parse::<Species>().unwrap(), Species::Dog);
    }

    #[test]
    fn species_from_str_rejects_unknown() {
        for raw in ["", "bird", "cats", " dog"] {
            assert_eq!(raw.parse::<Species>(), Err(ValidationError::InvalidSpecies));
        }
    }

    #[test]
    fn species_round_trips_through_display() {
        for species in Species::ALL {
            assert_eq!(species.to_string().parse::<Species>().unwrap(), species);
        }
    }
}
