//! Compatibility gate between an experience module and its wrapper.
//!
//! # Responsibility
//! - Classify how far apart two `major.minor.patch` versions are.
//! - Report the outcome through a boolean plus log side effects only.
//!
//! # Invariants
//! - A dependent version that fails to parse is a hard incompatibility.
//! - Major mismatch is a hard incompatibility; minor drift only warns.
//! - The gate never panics and never returns an error value.

pub mod semver;

use log::{debug, error, warn};

/// Outcome of comparing a base version with a dependent version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    /// Same major and same minor component.
    Compatible,
    /// Same major, different minor component.
    MinorDrift,
    /// Dependent version is not a valid `major.minor.patch` triplet.
    InvalidDependent,
    /// Major components differ, or the base has no major component.
    MajorMismatch,
}

impl VersionCheck {
    /// Whether callers may proceed with the pair.
    pub fn is_compatible(self) -> bool {
        matches!(self, Self::Compatible | Self::MinorDrift)
    }

    /// Stable status string used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::MinorDrift => "minor_drift",
            Self::InvalidDependent => "invalid_dependent",
            Self::MajorMismatch => "major_mismatch",
        }
    }
}

/// Classifies `dependent_version` against `base_version` without logging.
pub fn check_versions(base_version: &str, dependent_version: &str) -> VersionCheck {
    let Ok(dependent) = semver::parse(dependent_version) else {
        return VersionCheck::InvalidDependent;
    };

    if semver::major(base_version) != Some(dependent.major) {
        return VersionCheck::MajorMismatch;
    }
    if semver::minor(base_version) != Some(dependent.minor) {
        return VersionCheck::MinorDrift;
    }
    VersionCheck::Compatible
}

/// Returns `true` when `dependent_version` may run against `base_version`.
///
/// Logs at debug when the check starts, at warn on minor drift, and at error
/// on an invalid dependent version or a major mismatch.
pub fn validate_versions(base_version: &str, dependent_version: &str) -> bool {
    debug!(
        "event=version_check module=version status=start base={} dependent={}",
        base_version, dependent_version
    );

    let outcome = check_versions(base_version, dependent_version);
    match outcome {
        VersionCheck::InvalidDependent | VersionCheck::MajorMismatch => error!(
            "event=version_check module=version status=error reason={} base={} dependent={}",
            outcome.as_str(),
            base_version,
            dependent_version
        ),
        VersionCheck::MinorDrift => warn!(
            "event=version_check module=version status=warn reason={} base={} dependent={}",
            outcome.as_str(),
            base_version,
            dependent_version
        ),
        VersionCheck::Compatible => {}
    }

    outcome.is_compatible()
}

/// Version of this wrapper crate, as declared in its manifest.
pub fn wrapper_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Checks an experience module against this wrapper.
///
/// The experience is the base and the wrapper the dependent side.
pub fn check_wrapper(experience_version: &str) -> bool {
    validate_versions(experience_version, wrapper_version())
}

#[cfg(test)]
mod tests {
    use super::{check_versions, check_wrapper, validate_versions, wrapper_version, VersionCheck};

    #[test]
    fn same_major_and_minor_is_compatible() {
        assert_eq!(check_versions("1.2.0", "1.2.5"), VersionCheck::Compatible);
        assert!(validate_versions("1.2.0", "1.2.5"));
    }

    #[test]
    fn minor_drift_still_passes() {
        assert_eq!(check_versions("1.2.0", "1.3.0"), VersionCheck::MinorDrift);
        assert!(validate_versions("1.2.0", "1.3.0"));
    }

    #[test]
    fn major_mismatch_fails() {
        assert_eq!(check_versions("1.2.0", "2.0.0"), VersionCheck::MajorMismatch);
        assert!(!validate_versions("1.2.0", "2.0.0"));
    }

    #[test]
    fn invalid_dependent_fails_before_major_comparison() {
        assert_eq!(
            check_versions("1.2.0", "not-a-version"),
            VersionCheck::InvalidDependent
        );
        assert_eq!(
            check_versions("garbage", "not-a-version"),
            VersionCheck::InvalidDependent
        );
        assert!(!validate_versions("1.2.0", "not-a-version"));
    }

    #[test]
    fn invalid_base_counts_as_major_mismatch() {
        assert_eq!(check_versions("v1", "1.0.0"), VersionCheck::MajorMismatch);
        assert!(!validate_versions("v1", "1.0.0"));
    }

    #[test]
    fn wrapper_accepts_its_own_version() {
        assert!(check_wrapper(wrapper_version()));
    }
}
