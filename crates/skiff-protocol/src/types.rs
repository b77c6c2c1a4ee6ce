//! Platform and shell classification types shared across skiff crates.

use serde::{Deserialize, Serialize};

/// Operating system of a terminal frontend or backend.
///
/// A runtime value rather than a `cfg` because the two ends of a session can
/// disagree: a Windows frontend may drive a Linux remote or a WSL backend,
/// and environment/path rules follow the *target* OS, not the compile
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    Macos,
    Linux,
}

impl OperatingSystem {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OperatingSystem::Windows
        } else if cfg!(target_os = "macos") {
            OperatingSystem::Macos
        } else {
            OperatingSystem::Linux
        }
    }

    /// Whether this OS uses case-insensitive environment variable names and
    /// backslash path separators.
    pub fn is_windows(&self) -> bool {
        matches!(self, OperatingSystem::Windows)
    }
}

/// Known shell classification for a terminal session.
///
/// Detected by the session backend from the launched executable; `format`
/// uses it to pick a quoting strategy. Sessions with unrecognized shells
/// carry no classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    Sh,
    #[serde(rename = "pwsh")]
    PowerShell,
    #[serde(rename = "cmd")]
    CommandPrompt,
    GitBash,
    Wsl,
}

/// Controls whether a `LANG` locale variable is injected into spawned
/// shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleDetectionMode {
    /// Inject unless the inherited `LANG` already names a usable UTF-8 or
    /// EUC locale.
    #[default]
    Auto,
    /// Never inject.
    Off,
    /// Always inject, overwriting an inherited value.
    On,
}
