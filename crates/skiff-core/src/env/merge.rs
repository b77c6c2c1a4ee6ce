//! Overlay merging with platform-aware key matching.

use skiff_protocol::OperatingSystem;

use crate::env::types::{EnvironmentOverlay, ProcessEnvironment};

/// Key-matching strategy, selected once per merge call.
///
/// Returns the base key an overlay key addresses, or `None` when the base
/// has no such key. Windows environment blocks treat variable names
/// case-insensitively, so the folded matcher scans for an existing key and
/// preserves its original casing instead of inserting a duplicate.
type KeyMatcher = fn(&ProcessEnvironment, &str) -> Option<String>;

fn exact_key(base: &ProcessEnvironment, key: &str) -> Option<String> {
    base.contains_key(key).then(|| key.to_string())
}

fn folded_key(base: &ProcessEnvironment, key: &str) -> Option<String> {
    let folded = key.to_lowercase();
    base.keys().find(|k| k.to_lowercase() == folded).cloned()
}

/// Apply an overlay to `base` in place.
///
/// `Some(value)` sets the key, `None` deletes it, absent keys are never
/// touched. On [`OperatingSystem::Windows`] overlay keys match existing
/// base keys case-insensitively; elsewhere matching is exact.
pub fn merge(base: &mut ProcessEnvironment, overlay: &EnvironmentOverlay, os: OperatingSystem) {
    let matcher: KeyMatcher = if os.is_windows() { folded_key } else { exact_key };

    for (key, value) in overlay {
        let target = matcher(base, key).unwrap_or_else(|| key.clone());
        match value {
            Some(value) => {
                base.insert(target, value.clone());
            }
            None => {
                base.remove(&target);
            }
        }
    }
}

/// Copy the set entries of an overlay into `base`, always case-sensitively.
///
/// Here `None` means "don't set" rather than "delete": used when an overlay
/// is the whole environment (strict mode) and deletions have nothing to
/// delete from.
pub fn merge_non_null_keys(base: &mut ProcessEnvironment, overlay: &EnvironmentOverlay) {
    for (key, value) in overlay {
        if let Some(value) = value {
            base.insert(key.clone(), value.clone());
        }
    }
}

/// Copy a full environment snapshot into `base`, always case-sensitively.
pub fn copy_env(base: &mut ProcessEnvironment, source: &ProcessEnvironment) {
    for (key, value) in source {
        base.insert(key.clone(), value.clone());
    }
}
