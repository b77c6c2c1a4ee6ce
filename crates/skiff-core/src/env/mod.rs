//! Shell environment construction for spawned terminal sessions.
//!
//! Layering, from lowest to highest precedence: base process environment
//! (sanitized), the configured environment overlay, the launch config's
//! overlay, then skiff's own marker variables. `builder` orchestrates;
//! `merge`, `locale`, and `sanitize` are the primitives.

pub mod builder;
pub mod locale;
pub mod merge;
pub mod sanitize;
pub mod types;

pub use builder::{EnvironmentBuildOptions, build_environment};
pub use types::{EnvironmentOverlay, ProcessEnvironment, capture_process_environment};
