use std::path::{Component, Path};

/// Validates a project-relative path.
///
/// Checks:
/// - Not absolute
/// - No `..` or root/prefix components
///
/// An empty path designates the project root and is accepted.
pub fn validate_relative_path(path: &str) -> bool {
    if path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    Path::new(path).components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Join slash-separated path segments, skipping empty ones.
pub fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Validates a base name: a technical identifier starting with a letter.
///
/// Checks:
/// - Non-empty
/// - First character is an ASCII letter
/// - Remaining characters are ASCII alphanumeric, `-` or `_`
pub fn validate_base_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

/// Validates a project name: free text without quotes, backslashes or control characters.
pub fn validate_project_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.chars().all(|c| !c.is_control() && !matches!(c, '"' | '\'' | '\\' | '`'))
}
