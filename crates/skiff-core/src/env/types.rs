//! Environment map types shared by the merge and build steps.

use std::collections::HashMap;

/// Flat environment for a process about to be spawned.
///
/// Mutated in place by merges. Exclusively owned by the session-creation
/// call while under construction; this crate never keeps a reference after
/// returning.
pub type ProcessEnvironment = HashMap<String, String>;

/// Sparse environment patch.
///
/// `Some(value)` sets the key, `None` deletes it from the base environment,
/// and an absent key expresses no opinion.
pub type EnvironmentOverlay = HashMap<String, Option<String>>;

/// Snapshot the current process environment.
///
/// Convenience for hosts that spawn shells from their own environment
/// rather than a login-shell capture.
pub fn capture_process_environment() -> ProcessEnvironment {
    std::env::vars().collect()
}
