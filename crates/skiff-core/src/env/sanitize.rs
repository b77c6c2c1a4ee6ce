//! Removal of host-internal variables from a spawn environment.

use skiff_protocol::markers::ENV_VARS_TO_STRIP;

use crate::env::types::ProcessEnvironment;

/// Remove skiff's internal plumbing variables from `env` in place.
///
/// `extra_keys` lets call sites strip additional session-specific markers
/// on top of the shared [`ENV_VARS_TO_STRIP`] list.
pub fn sanitize_process_environment(env: &mut ProcessEnvironment, extra_keys: &[&str]) {
    for key in ENV_VARS_TO_STRIP.iter().chain(extra_keys.iter()) {
        env.remove(*key);
    }
}
