//! Core library for skiff terminal sessions.
//!
//! Resolves everything a spawned interactive shell needs before the backend
//! actually forks it: the final environment map, the working directory, and
//! a shell-safe rendition of any path handed to the shell. Process spawning
//! itself lives in the session daemon; this crate only produces values.

pub mod cwd;
pub mod env;
pub mod errors;
pub mod sessions;
pub mod shellpath;
pub mod variables;

pub use skiff_protocol::{LocaleDetectionMode, OperatingSystem, ShellType};
