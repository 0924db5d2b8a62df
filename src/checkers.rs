use crate::character_sets::is_relative_marker;

/// Check if bytes starting at position form a Windows drive letter: [a-zA-Z]:
///
/// Inside `file://`, a drive letter is never a host (`file://C:/dir`).
pub fn is_windows_drive_letter(bytes: &[u8], pos: usize) -> bool {
    match bytes.get(pos..pos + 2) {
        Some([letter, b':']) => letter.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Check if a string starts with `.`, `?` or `#`.
pub fn starts_relative(input: &str) -> bool {
    input.as_bytes().first().is_some_and(|&b| is_relative_marker(b))
}

/// Check if a path ends with a parent segment that could not be popped.
pub fn ends_with_parent(path: &str) -> bool {
    path.ends_with("/..")
}
