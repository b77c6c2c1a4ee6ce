//! Shell-safe path formatting.
//!
//! Turns a filesystem path into a string that can be pasted or sent to a
//! running shell without the shell mangling it: PowerShell call-operator
//! quoting, Windows double-quoting, Git Bash separator flipping, WSL path
//! translation, and POSIX backslash escaping.

pub mod detect;
pub mod escape;

use std::path::Path;

use tracing::debug;

use skiff_protocol::{OperatingSystem, ShellType};

use crate::variables::{WslDirection, WslPathTranslator};

pub use escape::escape_posix_path;

/// Path handed to [`format_path_for_shell`].
///
/// `Text` is used verbatim; `Resource` is a frontend filesystem reference
/// whose separators are flipped when frontend and target OS disagree.
#[derive(Debug, Clone, Copy)]
pub enum PathInput<'a> {
    Text(&'a str),
    Resource(&'a Path),
}

impl<'a> From<&'a str> for PathInput<'a> {
    fn from(text: &'a str) -> Self {
        PathInput::Text(text)
    }
}

impl<'a> From<&'a Path> for PathInput<'a> {
    fn from(path: &'a Path) -> Self {
        PathInput::Resource(path)
    }
}

/// Format `path` for safe use inside the session's shell.
///
/// `executable` and `title` identify the shell; without an executable there
/// is no shell context and the normalized path is returned unquoted.
/// `shell_type` is the backend's classification when it has one; otherwise
/// the executable name is sniffed. WSL translation goes through
/// `wsl_translator` and silently falls back to the untranslated path.
pub async fn format_path_for_shell(
    path: PathInput<'_>,
    executable: Option<&str>,
    title: &str,
    shell_type: Option<ShellType>,
    wsl_translator: Option<&dyn WslPathTranslator>,
    target_os: OperatingSystem,
    frontend_is_windows: bool,
) -> String {
    let path = normalize_input(path, target_os, frontend_is_windows);

    let Some(executable) = executable else {
        return path;
    };

    let has_space = path.contains(' ');
    let has_single_quote = path.contains('\'');
    let has_parens = path.contains('(') || path.contains(')');

    if detect::is_power_shell(executable, title) {
        if has_space || has_single_quote {
            // Double embedded single quotes, then invoke via the call operator
            return format!("& '{}'", path.replace('\'', "''"));
        }
        if has_parens {
            return format!("& '{path}'");
        }
    }

    if target_os.is_windows() {
        return format_windows_path(
            path,
            executable,
            shell_type,
            wsl_translator,
            has_space,
        )
        .await;
    }

    escape_posix_path(&path)
}

fn normalize_input(
    path: PathInput<'_>,
    target_os: OperatingSystem,
    frontend_is_windows: bool,
) -> String {
    match path {
        PathInput::Text(text) => text.to_string(),
        PathInput::Resource(resource) => {
            let path = resource.to_string_lossy().into_owned();
            if frontend_is_windows && !target_os.is_windows() {
                path.replace('\\', "/")
            } else if !frontend_is_windows && target_os.is_windows() {
                path.replace('/', "\\")
            } else {
                path
            }
        }
    }
}

async fn format_windows_path(
    path: String,
    executable: &str,
    shell_type: Option<ShellType>,
    wsl_translator: Option<&dyn WslPathTranslator>,
    has_space: bool,
) -> String {
    match shell_type {
        Some(ShellType::GitBash) => escape_posix_path(&path.replace('\\', "/")),
        Some(ShellType::Wsl) => translate_to_wsl(path, wsl_translator).await,
        Some(_) if has_space => format!("\"{path}\""),
        Some(_) => path,
        None => {
            if detect::looks_like_wsl(executable) {
                translate_to_wsl(path, wsl_translator).await
            } else if has_space {
                format!("\"{path}\"")
            } else {
                path
            }
        }
    }
}

async fn translate_to_wsl(path: String, translator: Option<&dyn WslPathTranslator>) -> String {
    let Some(translator) = translator else {
        return path;
    };
    match translator
        .translate(&path, WslDirection::WindowsToUnix)
        .await
    {
        Some(translated) if !translated.is_empty() => translated,
        _ => {
            debug!(event = "core.shellpath.wsl_translation_unavailable", path = %path);
            path
        }
    }
}
