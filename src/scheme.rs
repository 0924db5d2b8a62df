use crate::character_sets::is_scheme_byte;

/// How the parser treats a recognized scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    /// `file:`, whose `//` authority marker is optional
    File,
    /// Any other `scheme://` prefix
    NotSpecial,
}

/// Detect the scheme a reference starts with.
/// Returns the scheme type and its length (without the trailing ':').
///
/// `file:` is always a scheme. Any other run of scheme characters only
/// counts when followed by "://", so drive letters (`C:\dir`), host/port
/// pairs (`localhost:8080`) and opaque forms (`data:...`) stay relative.
pub fn get_scheme(input: &str) -> Option<(SchemeType, usize)> {
    let bytes = input.as_bytes();

    if bytes.starts_with(b"file:") {
        return Some((SchemeType::File, 4));
    }

    let len = bytes.iter().position(|&b| !is_scheme_byte(b))?;
    if len > 0 && bytes[len..].starts_with(b"://") {
        Some((SchemeType::NotSpecial, len))
    } else {
        None
    }
}
