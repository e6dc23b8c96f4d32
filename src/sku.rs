//! SKUs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing SKU identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkuError {
    /// The token was not a single character.
    #[error("expected a single-letter SKU, got {0:?}")]
    NotSingleLetter(String),

    /// The character was not an ASCII letter.
    #[error("SKUs must be ASCII letters, got {0:?}")]
    NotALetter(char),
}

/// A stock-keeping unit identifier: one distinct product type, written as a
/// single ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(char);

impl Sku {
    /// Create a SKU from a character, if it is an ASCII letter.
    ///
    /// Non-letter characters are not SKUs; basket tokenization uses the
    /// `None` case to discard separators and punctuation.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then_some(Self(c))
    }

    /// The underlying letter.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sku {
    type Err = SkuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or(SkuError::NotALetter(c)),
            _ => Err(SkuError::NotSingleLetter(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sku {
    type Error = SkuError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0.to_string()
    }
}
