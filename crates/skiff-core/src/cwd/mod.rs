//! Working-directory resolution for spawned terminal sessions.
//!
//! Ordered fallback chain: explicit launch-config cwd, configured default
//! cwd (absolute, or relative to the workspace root), workspace root, user
//! home, empty string. Variable-resolution failures never block session
//! creation.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use skiff_protocol::OperatingSystem;

use crate::sessions::ShellLaunchConfig;
use crate::variables::VariableResolver;

/// Resolve the working directory for a session about to be spawned.
///
/// An explicit `launch_config.cwd` always wins, even when resolving it
/// fails (the unresolved literal is used rather than falling back). The
/// configured cwd is consulted next unless the launch config opts out;
/// resolution failures there drop to the workspace-root/home fallback.
pub async fn resolve(
    launch_config: &ShellLaunchConfig,
    user_home: Option<&Path>,
    resolver: Option<&dyn VariableResolver>,
    workspace_root: Option<&Path>,
    configured_cwd: Option<&str>,
    os: OperatingSystem,
) -> String {
    let candidate = if let Some(cwd) = &launch_config.cwd {
        Some(resolve_explicit_cwd(cwd, resolver).await)
    } else if !launch_config.ignore_configuration_cwd
        && let Some(configured) = configured_cwd
    {
        resolve_configured_cwd(configured, resolver, workspace_root).await
    } else {
        None
    };

    let cwd = candidate.unwrap_or_else(|| {
        workspace_root
            .or(user_home)
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let cwd = sanitize_cwd(&cwd, os);
    debug!(event = "core.cwd.resolved", cwd = %cwd);
    cwd
}

async fn resolve_explicit_cwd(cwd: &Path, resolver: Option<&dyn VariableResolver>) -> String {
    let literal = cwd.to_string_lossy().into_owned();
    let Some(resolver) = resolver else {
        return literal;
    };
    match resolver.resolve(&literal).await {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!(
                event = "core.cwd.resolution_failed",
                cwd = %literal,
                error = %e
            );
            literal
        }
    }
}

/// Resolve the configured default cwd. `None` means "no usable candidate":
/// resolution failed, resolved to empty, or was relative with no workspace
/// root to anchor it.
async fn resolve_configured_cwd(
    configured: &str,
    resolver: Option<&dyn VariableResolver>,
    workspace_root: Option<&Path>,
) -> Option<String> {
    let resolved = match resolver {
        Some(resolver) => match resolver.resolve(configured).await {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(
                    event = "core.cwd.configured_resolution_failed",
                    cwd = %configured,
                    error = %e
                );
                return None;
            }
        },
        None => configured.to_string(),
    };

    if resolved.is_empty() {
        return None;
    }
    if Path::new(&resolved).is_absolute() {
        return Some(resolved);
    }
    workspace_root.map(|root| root.join(&resolved).to_string_lossy().into_owned())
}

/// Platform cleanup of a resolved cwd string.
///
/// Strips one pair of wrapping quotes (shells and settings files both leak
/// them) and on Windows uppercases a leading drive letter so cwd comparison
/// against other Windows paths stays consistent.
pub fn sanitize_cwd(cwd: &str, os: OperatingSystem) -> String {
    let mut cwd = cwd.to_string();
    if cwd.len() >= 2 {
        let first = cwd.chars().next();
        let last = cwd.chars().next_back();
        if matches!(first, Some('\'') | Some('"')) && first == last {
            cwd = cwd[1..cwd.len() - 1].to_string();
        }
    }
    // Only a drive-letter prefix gets case-normalized; relative paths and
    // UNC paths pass through untouched
    if os.is_windows()
        && cwd.as_bytes().get(1) == Some(&b':')
        && let Some(first) = cwd.chars().next()
        && first.is_ascii_lowercase()
    {
        cwd.replace_range(..1, &first.to_ascii_uppercase().to_string());
    }
    cwd
}

/// Home directory of the current user, for hosts with no configured home.
pub fn default_user_home() -> Option<PathBuf> {
    dirs::home_dir()
}
