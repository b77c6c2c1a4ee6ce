//! Collaborator traits for variable substitution and WSL path translation.
//!
//! Both capabilities live outside this crate (the configuration resolver
//! service and the WSL backend process). The traits return boxed futures so
//! callers can hold them as `&dyn` — the same seam shape the session daemon
//! uses for its transport callbacks.

use futures::future::BoxFuture;

use crate::errors::SkiffError;

/// Errors from the host's configuration-variable resolver.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Unknown variable reference '{name}'")]
    UnknownVariable { name: String },

    #[error("Variable resolution failed: {message}")]
    ResolutionFailed { message: String },
}

impl SkiffError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::UnknownVariable { .. } => "RESOLVE_UNKNOWN_VARIABLE",
            ResolveError::ResolutionFailed { .. } => "RESOLVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ResolveError::UnknownVariable { .. })
    }
}

/// Resolves embedded variable references (`${workspaceFolder}` and friends)
/// in a string.
///
/// Implemented by the host's configuration resolver. Every consumer in this
/// crate treats failure as non-fatal: the unresolved literal is used
/// instead. A terminal must still launch when the resolver is degraded.
pub trait VariableResolver: Send + Sync {
    /// Resolve all variable references in `text`.
    fn resolve<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<String, ResolveError>>;
}

/// Direction of a WSL path translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WslDirection {
    /// `C:\Users\me` -> `/mnt/c/Users/me`
    WindowsToUnix,
    /// `/mnt/c/Users/me` -> `C:\Users\me`
    UnixToWindows,
}

/// Translates paths across the WSL boundary.
///
/// Implemented by the WSL session backend (out-of-process call to
/// `wslpath`). `None` means the backend is unavailable or had no answer;
/// consumers fall back to the untranslated path.
pub trait WslPathTranslator: Send + Sync {
    /// Translate `path` in the given direction, if possible.
    fn translate<'a>(
        &'a self,
        path: &'a str,
        direction: WslDirection,
    ) -> BoxFuture<'a, Option<String>>;
}
