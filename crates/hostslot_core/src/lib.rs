//! Slot takeover shim between a host UI and an injected experience module.
//!
//! The host mounts views against named slots; an experience claims a slot,
//! installs a render function and releases it again. A separate version gate
//! checks that experience and wrapper agree on their major version.

pub mod host;
pub mod logging;
pub mod slot;
pub mod version;

pub use host::{SlotMount, HOST_REGISTRANT_ID};
pub use logging::{default_log_level, init_logging, logging_status};
pub use slot::content::{resolve_content, RenderFn, SlotContent, SlotProps, ViewNode};
pub use slot::handle::SlotHandle;
pub use slot::registry::{RedrawCallback, SlotRegistry, SlotSnapshot};
pub use version::semver::{SemverError, SemverTriplet};
pub use version::{check_versions, check_wrapper, validate_versions, wrapper_version, VersionCheck};

/// Minimal health-check API for host integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}
