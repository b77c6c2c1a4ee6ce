//! Final environment assembly for a terminal session.

use futures::future::join_all;
use tracing::debug;

use skiff_protocol::{LocaleDetectionMode, OperatingSystem, markers};

use crate::env::types::{EnvironmentOverlay, ProcessEnvironment};
use crate::env::{locale, merge, sanitize};
use crate::sessions::ShellLaunchConfig;
use crate::variables::VariableResolver;

/// Session-independent inputs to [`build_environment`].
#[derive(Debug, Clone)]
pub struct EnvironmentBuildOptions {
    /// Host version, injected as `TERM_PROGRAM_VERSION` when present.
    pub version: Option<String>,

    /// Locale injection policy.
    pub locale_mode: LocaleDetectionMode,

    /// UI language tag of the host (`en-US`, `de`, ...), consulted when a
    /// `LANG` value is injected.
    pub locale_tag: Option<String>,

    /// Target OS of the session backend.
    pub os: OperatingSystem,
}

impl Default for EnvironmentBuildOptions {
    fn default() -> Self {
        Self {
            version: None,
            locale_mode: LocaleDetectionMode::default(),
            locale_tag: None,
            os: OperatingSystem::current(),
        }
    }
}

/// Build the environment for a shell about to be spawned.
///
/// Layering, lowest to highest precedence: `base_env` (sanitized of host
/// plumbing vars), the configured overlay, the launch config's overlay,
/// then skiff's marker variables. Overlay string values go through
/// `resolver` first when one is supplied; a value that fails to resolve is
/// used verbatim. With `strict_env` the launch overlay *is* the entire
/// environment and every other step is skipped.
///
/// Never fails: a terminal must still launch when the variable resolver is
/// degraded.
pub async fn build_environment(
    launch_config: &ShellLaunchConfig,
    config_overlay: Option<&EnvironmentOverlay>,
    resolver: Option<&dyn VariableResolver>,
    options: &EnvironmentBuildOptions,
    base_env: &ProcessEnvironment,
) -> ProcessEnvironment {
    let mut result = ProcessEnvironment::new();

    if launch_config.strict_env {
        if let Some(env) = &launch_config.env {
            merge::merge_non_null_keys(&mut result, env);
        }
        debug!(
            event = "core.env.build_completed",
            strict = true,
            keys = result.len()
        );
        return result;
    }

    merge::copy_env(&mut result, base_env);

    let mut config_layer = config_overlay.cloned().unwrap_or_default();
    let mut launch_layer = launch_config.env.clone().unwrap_or_default();
    if let Some(resolver) = resolver {
        resolve_overlay_values(&mut config_layer, resolver).await;
        resolve_overlay_values(&mut launch_layer, resolver).await;
    }

    sanitize::sanitize_process_environment(&mut result, &[]);
    merge::merge(&mut result, &config_layer, options.os);
    // Launch config has final precedence and may delete inherited keys
    merge::merge(&mut result, &launch_layer, options.os);

    result.insert(
        markers::TERM_PROGRAM.to_string(),
        markers::TERM_PROGRAM_VALUE.to_string(),
    );
    if let Some(version) = &options.version {
        result.insert(markers::TERM_PROGRAM_VERSION.to_string(), version.clone());
    }
    if locale::should_inject_lang(&result, options.locale_mode) {
        result.insert(
            markers::LANG.to_string(),
            locale::build_locale_value(options.locale_tag.as_deref()),
        );
    }
    result.insert(
        markers::COLORTERM.to_string(),
        markers::COLORTERM_VALUE.to_string(),
    );

    debug!(
        event = "core.env.build_completed",
        strict = false,
        keys = result.len()
    );
    result
}

/// Substitute variable references in every set value of `overlay`.
///
/// All entries resolve concurrently; each task writes back to its own key,
/// so completion order does not matter. A failed resolution keeps the
/// original literal.
async fn resolve_overlay_values(overlay: &mut EnvironmentOverlay, resolver: &dyn VariableResolver) {
    let pending: Vec<(String, String)> = overlay
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.clone(), v.clone())))
        .collect();

    let resolved = join_all(pending.into_iter().map(|(key, value)| async move {
        match resolver.resolve(&value).await {
            Ok(resolved) => (key, resolved),
            Err(e) => {
                debug!(
                    event = "core.env.substitution_failed",
                    key = %key,
                    error = %e
                );
                (key, value)
            }
        }
    }))
    .await;

    for (key, value) in resolved {
        overlay.insert(key, Some(value));
    }
}
