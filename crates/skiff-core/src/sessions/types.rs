//! Shell launch configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env::EnvironmentOverlay;

/// Per-session launch request, as supplied by the frontend or a profile.
///
/// All fields are optional opinions layered over configuration defaults;
/// the environment core consumes `cwd`, `env`, `strict_env`,
/// `ignore_configuration_cwd`, `executable`, and `name` (the session
/// title, used for shell detection when the executable is opaque).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellLaunchConfig {
    /// Shell executable to launch.
    pub executable: Option<String>,

    /// Arguments for the executable.
    pub args: Vec<String>,

    /// Explicit working directory. Wins over every configured fallback.
    pub cwd: Option<PathBuf>,

    /// Environment patch applied with final precedence; `null` entries
    /// delete inherited keys.
    pub env: Option<EnvironmentOverlay>,

    /// When true, `env` *is* the entire environment: nothing is inherited,
    /// sanitized, or injected.
    pub strict_env: bool,

    /// Skip the configured default cwd and go straight to the
    /// workspace-root/home fallback.
    pub ignore_configuration_cwd: bool,

    /// Session title.
    pub name: Option<String>,
}

impl ShellLaunchConfig {
    /// A launch config that only names an executable.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: Some(executable.into()),
            ..Self::default()
        }
    }
}
