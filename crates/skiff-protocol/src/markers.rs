//! Environment-variable marker constants for spawned terminal sessions.
//!
//! Skiff injects a small set of metadata variables into every spawned shell
//! and strips its own internal plumbing variables before the shell sees them.
//! Lives in skiff-protocol so skiff-core (environment construction) and the
//! session daemon (PTY spawning) share a single source of truth.

/// Variable identifying the host program to the spawned shell.
pub const TERM_PROGRAM: &str = "TERM_PROGRAM";

/// Value of [`TERM_PROGRAM`] for shells spawned by skiff.
pub const TERM_PROGRAM_VALUE: &str = "skiff";

/// Variable carrying the host program version, set when a version is known.
pub const TERM_PROGRAM_VERSION: &str = "TERM_PROGRAM_VERSION";

/// Advertises 24-bit color support to the spawned shell.
pub const COLORTERM: &str = "COLORTERM";

/// Value of [`COLORTERM`] for shells spawned by skiff.
pub const COLORTERM_VALUE: &str = "truecolor";

/// POSIX locale variable, injected per the locale-detection setting.
pub const LANG: &str = "LANG";

/// Host-internal environment variables to remove before spawning a shell.
///
/// These are process-plumbing markers set by the skiff host for its own
/// child processes (IPC hooks, proxy routing, CLI re-entry detection). A
/// spawned interactive shell inherits the host environment, so they would
/// leak into every command the user runs and break nested `skiff` CLI
/// invocations.
///
/// Entries must be valid POSIX environment variable names: non-empty,
/// containing only ASCII alphanumerics and underscores. This is enforced
/// by tests.
pub const ENV_VARS_TO_STRIP: &[&str] = &[
    // IPC sockets back into the host; stale in the shell's children
    "SKIFF_IPC_HOOK",
    "SKIFF_IPC_HOOK_CLI",
    // Proxy URI the host rewrites for its own webviews
    "SKIFF_PROXY_URI",
    // CLI re-entry detection
    "SKIFF_CLI",
    "SKIFF_PID",
    "SKIFF_PORTABLE",
    "SKIFF_NLS_CONFIG",
];
