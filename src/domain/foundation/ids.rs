//! Identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// GitHub issue number identifying a post. Always positive.
///
/// Comments reference posts by this number (`post_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PostNumber(u64);

impl PostNumber {
    /// Creates a post number, rejecting zero.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::invalid_format(
                "postNumber",
                "must be a positive integer",
            ));
        }
        Ok(Self(value))
    }

    /// Interprets a loosely typed JSON value: a positive integer, an
    /// integral float, or a numeric string.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().and_then(integral))
                .and_then(|v| Self::new(v).ok()),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returns the raw number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

fn integral(f: f64) -> Option<u64> {
    (f.fract() == 0.0 && f > 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

impl TryFrom<u64> for PostNumber {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostNumber> for u64 {
    fn from(number: PostNumber) -> Self {
        number.0
    }
}

impl FromStr for PostNumber {
    type Err = ValidationError;

    /// Accepts surrounding whitespace and integral decimals such as `4.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s
            .parse::<u64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(integral))
            .ok_or_else(|| {
                ValidationError::invalid_format("postNumber", "must be a positive integer")
            })?;
        Self::new(value)
    }
}

impl fmt::Display for PostNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
