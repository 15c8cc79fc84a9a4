//! Numeric day positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Position of a day folder within its program.
///
/// Ordinals compare numerically, so `2` sorts before `10` regardless of how
/// the folder names sort as strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ordinal(u32);

impl Ordinal {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse the leading decimal digits of a folder name.
    ///
    /// Accepts `1_day`, `10_day`, `02-intro` and bare `7`.
    pub fn from_folder_name(name: &str) -> Result<Self> {
        let digits: &str = {
            let end = name
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(name.len());
            &name[..end]
        };
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidOrdinal {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Ordinal {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_digits() {
        assert_eq!(Ordinal::from_folder_name("1_day"), Ok(Ordinal::new(1)));
        assert_eq!(Ordinal::from_folder_name("10_day"), Ok(Ordinal::new(10)));
        assert_eq!(Ordinal::from_folder_name("02-intro"), Ok(Ordinal::new(2)));
        assert_eq!(Ordinal::from_folder_name("7"), Ok(Ordinal::new(7)));
    }

    #[test]
    fn rejects_names_without_number() {
        assert!(Ordinal::from_folder_name("day_1").is_err());
        assert!(Ordinal::from_folder_name("").is_err());
        assert!(Ordinal::from_folder_name("99999999999_day").is_err());
    }

    #[test]
    fn orders_numerically() {
        let mut ordinals = vec![Ordinal::new(10), Ordinal::new(2), Ordinal::new(1)];
        ordinals.sort();
        assert_eq!(ordinals, vec![Ordinal::new(1), Ordinal::new(2), Ordinal::new(10)]);
    }
}
