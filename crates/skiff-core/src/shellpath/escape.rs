//! POSIX shell escaping for paths handed to a running shell.

/// Characters a POSIX shell assigns meaning to inside an unquoted word.
///
/// Fixed table so escaping is identical on every platform. Backslash is
/// included: a literal backslash in the path must itself be escaped.
const POSIX_ESCAPE_CHARS: &[char] = &[
    '\\', ' ', '\'', '"', '`', '$', '&', '|', ';', '<', '>', '(', ')', '~', '*', '!', '#',
];

/// Backslash-escape every shell-significant character in `path`.
pub fn escape_posix_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if POSIX_ESCAPE_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_path_unchanged() {
        assert_eq!(escape_posix_path("/usr/local/bin"), "/usr/local/bin");
    }

    #[test]
    fn test_escape_spaces() {
        assert_eq!(escape_posix_path("/a b/c"), "/a\\ b/c");
    }

    #[test]
    fn test_escape_quotes_and_dollars() {
        assert_eq!(escape_posix_path("/a's/$HOME"), "/a\\'s/\\$HOME");
        assert_eq!(escape_posix_path("/say \"hi\""), "/say\\ \\\"hi\\\"");
    }

    #[test]
    fn test_escape_backslash_is_not_double_escaped() {
        assert_eq!(escape_posix_path("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_parens_and_glob_chars() {
        assert_eq!(escape_posix_path("/a(1)/b*"), "/a\\(1\\)/b\\*");
    }
}
