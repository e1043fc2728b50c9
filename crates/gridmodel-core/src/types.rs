//! Length values accepted where a grid extent may be relative.

use std::fmt;
use std::str::FromStr;

use crate::errors::GeometryError;
use crate::validation::{is_number, parse_percent};

/// An absolute or relative extent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLength", into = "RawLength")
)]
pub enum Length {
    /// Absolute size in pixels
    Px(f64),
    /// Percentage of the containing extent
    Percent(f64),
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self::Px(value)
    }

    pub fn percent(value: f64) -> Self {
        Self::Percent(value)
    }

    /// Convert to pixels, resolving percentages against `parent_px`.
    ///
    /// Returns `None` for a percentage when no parent extent is known.
    pub fn to_px(&self, parent_px: Option<f64>) -> Option<f64> {
        match *self {
            Self::Px(value) => Some(value),
            Self::Percent(value) => parent_px.map(|p| p * value / 100.0),
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// Resolve to pixels, failing with a named error when a percentage has no parent.
    pub fn resolve(&self, param: &'static str, parent_px: Option<f64>) -> Result<f64, GeometryError> {
        let px = self
            .to_px(parent_px)
            .ok_or(GeometryError::MissingContainer { param })?;
        if !is_number(px) {
            return Err(GeometryError::invalid_param(param, self));
        }
        Ok(px)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl FromStr for Length {
    type Err = GeometryError;

    /// Parse `"44%"` as a percentage or a bare number as pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.ends_with('%') {
            return parse_percent(s)
                .map(Self::Percent)
                .ok_or_else(|| GeometryError::InvalidPercentString { value: s.to_string() });
        }
        match s.parse::<f64>() {
            Ok(value) if is_number(value) => Ok(Self::Px(value)),
            _ => Err(GeometryError::invalid_param("length", s)),
        }
    }
}

/// Wire form of [`Length`]: a JSON number or a percent string.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<RawLength> for Length {
    type Error = GeometryError;

    fn try_from(raw: RawLength) -> Result<Self, Self::Error> {
        match raw {
            RawLength::Number(value) => Ok(Self::Px(value)),
            RawLength::Text(text) => text.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Length> for RawLength {
    fn from(length: Length) -> Self {
        match length {
            Length::Px(value) => Self::Number(value),
            Length::Percent(_) => Self::Text(length.to_string()),
        }
    }
}
