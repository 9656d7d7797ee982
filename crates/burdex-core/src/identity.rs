//! # Domain Identity Newtypes
//!
//! Newtype wrappers for identifiers in the reporting contract. These prevent
//! accidental identifier confusion: a raw string cannot be passed where a
//! validated country code is expected.
//!
//! ## Invariant
//!
//! A `CountryId` is always a non-empty, uppercase ASCII-alphabetic code
//! (ISO 3166 style, e.g. `AFG`, `ZWE`). Deserialization routes through the
//! same check, so persisted data cannot smuggle in a malformed id.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A validated country code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CountryId(String);

impl CountryId {
    /// Validate and wrap a country code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidCountryId`] if the code is empty
    /// or contains anything other than uppercase ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigurationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ConfigurationError::InvalidCountryId {
                id: code,
                reason: "country id must not be empty",
            });
        }
        if !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigurationError::InvalidCountryId {
                id: code,
                reason: "country id must be uppercase ASCII letters",
            });
        }
        Ok(Self(code))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryId {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A country in a reporting contract: validated id plus human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// The country code.
    pub id: CountryId,
    /// Human-readable name.
    pub name: String,
}

impl Country {
    /// Build a country from a raw code and name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidCountryId`] if the code is
    /// malformed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            id: CountryId::new(id)?,
            name: name.into(),
        })
    }
}
