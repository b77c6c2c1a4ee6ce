pub mod markers;
mod types;

pub use types::{LocaleDetectionMode, OperatingSystem, ShellType};
