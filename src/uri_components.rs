/// URI reference component offsets
/// Tracks where each component starts and ends in the source string
///
/// Source layout: "<https://user@example.com:8080/path?query#hash>"
/// - `protocol_end`: 6 (end of "https:")
/// - `username_end`: 12 (end of "user")
/// - `host_start`: 13 (start of "example.com:8080", after "@")
/// - `host_end`: 29 (end of "example.com:8080"; the port stays in the host)
/// - `pathname_start`: 29 (start of "/path")
/// - `search_start`: Some(34) (start of "?query")
/// - `hash_start`: Some(40) (start of "#hash")
///
/// Without an authority, `username_end`, `host_start` and `host_end` all
/// equal `protocol_end`. Query and hash use `Option` because a relative
/// reference such as "?q" has its query at offset 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriComponents {
    pub protocol_end: usize,
    pub username_end: usize,
    pub host_start: usize,
    pub host_end: usize,
    pub pathname_start: usize,
    pub search_start: Option<usize>,
    pub hash_start: Option<usize>,
}

impl UriComponents {
    /// Create a new `UriComponents` with all offsets at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Check for a "//" authority marker after the protocol
    pub fn has_authority(&self) -> bool {
        self.host_start > self.protocol_end
    }

    /// Check for userinfo terminated by "@"
    pub fn has_credentials(&self) -> bool {
        self.host_start > self.username_end
    }

    /// Get the username start position (after "//")
    pub fn username_start(&self) -> usize {
        if self.has_authority() {
            self.protocol_end + 2
        } else {
            self.protocol_end
        }
    }

    /// Get the end position of the pathname (before search or hash, or end of input)
    pub fn pathname_end(&self, len: usize) -> usize {
        self.search_start.or(self.hash_start).unwrap_or(len)
    }

    /// Get the end position of the search (before hash, or end of input)
    pub fn search_end(&self, len: usize) -> usize {
        self.hash_start.unwrap_or(len)
    }

    /// Point every authority offset at `pos`, marking "no authority"
    pub fn clear_authority(&mut self, pos: usize) {
        self.username_end = pos;
        self.host_start = pos;
        self.host_end = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_components_new() {
        let components = UriComponents::new();
        assert_eq!(components.protocol_end, 0);
        assert_eq!(components.host_start, 0);
        assert_eq!(components.search_start, None);
        assert_eq!(components.hash_start, None);
        assert!(!components.has_authority());
    }

    #[test]
    fn test_username_start() {
        let mut components = UriComponents::new();
        components.protocol_end = 5; // "http:"
        components.username_end = 7;
        components.host_start = 7; // After "//"
        assert!(components.has_authority());
        assert!(!components.has_credentials());
        assert_eq!(components.username_start(), 7); // Skips "//"
    }

    #[test]
    fn test_username_start_no_authority() {
        let mut components = UriComponents::new();
        components.protocol_end = 5; // "file:"
        components.clear_authority(5);
        assert!(!components.has_authority());
        assert_eq!(components.username_start(), 5); // No "//" to skip
    }

    #[test]
    fn test_credentials() {
        let mut components = UriComponents::new();
        components.username_end = 6; // "//user"
        components.host_start = 7; // After "@"
        assert!(components.has_credentials());
    }

    #[test]
    fn test_component_ends() {
        let mut components = UriComponents::new();
        assert_eq!(components.pathname_end(10), 10);
        components.hash_start = Some(6);
        assert_eq!(components.pathname_end(10), 6);
        assert_eq!(components.search_end(10), 6);
        components.search_start = Some(3);
        assert_eq!(components.pathname_end(10), 3);
    }
}
