//! Nominee address with case-insensitive identity.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::TypesError;

/// The address of a nominee (a staking contract eligible for vote weight).
///
/// EVM addresses arrive in mixed checksum casing from some sources and in
/// lower case from others, so two addresses are the same nominee whenever
/// they match ignoring ASCII case. The original casing is kept for output.
///
/// Deserializing goes through [`NomineeAddress::parse`], so blank addresses
/// are rejected at the input boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NomineeAddress(String);

impl NomineeAddress {
    /// Wrap a raw address string without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse an address, rejecting empty strings and embedded whitespace.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(TypesError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the address as originally written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased lookup key.
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for NomineeAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for NomineeAddress {}

impl Hash for NomineeAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
        state.write_u8(0xff);
    }
}

impl Ord for NomineeAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl PartialOrd for NomineeAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NomineeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NomineeAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NomineeAddress {
    type Error = TypesError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<NomineeAddress> for String {
    fn from(address: NomineeAddress) -> Self {
        address.0
    }
}

impl From<&str> for NomineeAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
