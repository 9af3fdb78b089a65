//! Named UI slots that an external experience module can take over.
//!
//! This module defines the shared slot namespace, the per-registrant
//! ownership protocol and the content an owner installs. Mounting view
//! instances lives in `crate::host`.

pub mod content;
pub mod handle;
pub mod registry;
