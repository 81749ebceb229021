//! Parcels attached to a person.
//!
//! A parcel is identified by a short alphanumeric name, typically the carrier
//! or shop it came from (`Shopee`, `Lazada`, `NinjaVan42`). A person holds a
//! set of them; see [`ParcelSet`].

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Parcels held by one person. Ordered so listings and saved files are stable.
pub type ParcelSet = BTreeSet<Parcel>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Parcel(String);

impl Parcel {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Parcel names should be alphanumeric";

    /// Non-empty, ASCII letters and digits only.
    ///
    /// ```
    /// use bookopedia::model::parcel::Parcel;
    ///
    /// assert!(Parcel::is_valid("Shopee"));
    /// assert!(Parcel::is_valid("NinjaVan42"));
    ///
    /// assert!(!Parcel::is_valid(""));
    /// assert!(!Parcel::is_valid("hubby*"));
    /// assert!(!Parcel::is_valid("two words"));
    /// ```
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Parcel {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Parcel::is_valid(s) {
            Ok(Parcel(s.to_string()))
        } else {
            Err(FieldError::Parcel)
        }
    }
}

impl TryFrom<String> for Parcel {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Parcel::is_valid(&value) {
            Ok(Parcel(value))
        } else {
            Err(FieldError::Parcel)
        }
    }
}

impl From<Parcel> for String {
    fn from(value: Parcel) -> Self {
        value.0
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parcels() {
        assert!(Parcel::from_str("Shopee").is_ok());
        assert!(Parcel::from_str("Lazada").is_ok());
        assert!(Parcel::from_str("123").is_ok());
    }

    #[test]
    fn test_invalid_parcels() {
        assert_eq!(Parcel::from_str(""), Err(FieldError::Parcel));
        assert_eq!(Parcel::from_str("hubby*"), Err(FieldError::Parcel));
        assert_eq!(Parcel::from_str("shop-ee"), Err(FieldError::Parcel));
        assert_eq!(Parcel::from_str("Shopee "), Err(FieldError::Parcel));
    }

    #[test]
    fn test_display_brackets_name() {
        let parcel = Parcel::from_str("Lazada").unwrap();
        assert_eq!(parcel.to_string(), "[Lazada]");
        assert_eq!(parcel.name(), "Lazada");
    }

    #[test]
    fn test_set_deduplicates() {
        let set: ParcelSet = ["Shopee", "Lazada", "Shopee"]
            .iter()
            .map(|s| Parcel::from_str(s).unwrap())
            .collect();
        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.iter().map(Parcel::name).collect();
        assert_eq!(names, vec!["Lazada", "Shopee"]);
    }
}
