//! Shell-family detection from executable names and session titles.

/// Basename of an executable with its extension stripped, lowercased.
///
/// Manual separator handling because backend paths may use the other OS's
/// separators (`C:\W\System32\wsl.exe` seen from a Linux frontend).
pub(crate) fn executable_stem(executable: &str) -> String {
    let base = executable
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(executable);
    let stem = match base.rfind('.') {
        Some(0) | None => base,
        Some(index) => &base[..index],
    };
    stem.to_lowercase()
}

/// Whether the executable or session title names a PowerShell variant.
pub(crate) fn is_power_shell(executable: &str, title: &str) -> bool {
    let stem = executable_stem(executable);
    let title = title.to_lowercase();
    stem == "pwsh" || stem == "powershell" || title == "pwsh" || title == "powershell"
}

/// Sniff an unclassified Windows executable for a WSL entry point.
///
/// Matches `wsl` anywhere in the name, or `bash.exe` as long as the path
/// does not mention `git` (Git Bash ships its own bash.exe that stays on
/// the Windows side).
pub(crate) fn looks_like_wsl(executable: &str) -> bool {
    let lower = executable.to_lowercase();
    lower.contains("wsl") || (lower.contains("bash.exe") && !lower.contains("git"))
}
