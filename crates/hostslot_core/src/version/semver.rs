//! Strict `major.minor.patch` version primitives.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parsed numeric version triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemverTriplet {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Display for SemverTriplet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses one version string.
///
/// Leading/trailing whitespace is ignored. Every component must be a
/// non-empty run of ASCII digits.
pub fn parse(value: &str) -> Result<SemverTriplet, SemverError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SemverError::Empty);
    }

    let parts: Vec<&str> = normalized.split('.').collect();
    if parts.len() != 3 {
        return Err(SemverError::WrongComponentCount(parts.len()));
    }

    let mut numbers = [0_u64; 3];
    for (slot, part) in numbers.iter_mut().zip(parts.iter()) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(SemverError::InvalidComponent((*part).to_string()));
        }
        *slot = part
            .parse()
            .map_err(|_| SemverError::InvalidComponent((*part).to_string()))?;
    }

    Ok(SemverTriplet {
        major: numbers[0],
        minor: numbers[1],
        patch: numbers[2],
    })
}

pub fn is_valid(value: &str) -> bool {
    parse(value).is_ok()
}

/// Returns the major component, or `None` for an invalid version.
pub fn major(value: &str) -> Option<u64> {
    parse(value).ok().map(|version| version.major)
}

/// Returns the minor component, or `None` for an invalid version.
pub fn minor(value: &str) -> Option<u64> {
    parse(value).ok().map(|version| version.minor)
}

/// Version parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    Empty,
    WrongComponentCount(usize),
    InvalidComponent(String),
}

impl Display for SemverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "version must not be empty"),
            Self::WrongComponentCount(count) => write!(
                f,
                "version has {count} components (expected major.minor.patch)"
            ),
            Self::InvalidComponent(value) => {
                write!(f, "version component is not numeric: `{value}`")
            }
        }
    }
}

impl Error for SemverError {}
