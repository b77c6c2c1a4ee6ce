//! Session launch configuration types.

pub mod types;

pub use types::ShellLaunchConfig;
