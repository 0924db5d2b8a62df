use crate::compat::String;
use crate::types::UriKind;
use crate::uri_base::UriBase;
use crate::uri_components::UriComponents;

/// A parsed URI reference that borrows its source string.
///
/// Components are offsets into the source, so getters are zero-copy and
/// parsing never allocates. Parsing is total: any string is a reference,
/// at worst a relative path.
///
/// # Examples
///
/// ```
/// use resolve_uri::{UriKind, UriRef};
///
/// let uri = UriRef::parse("https://example.com:8080/dir/main.js?v=1#L10");
/// assert_eq!(uri.kind(), UriKind::Absolute);
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.host(), Some("example.com:8080"));
/// assert_eq!(uri.path(), "/dir/main.js");
/// assert_eq!(uri.query(), Some("?v=1"));
/// assert_eq!(uri.hash(), Some("#L10"));
/// assert_eq!(uri.to_string(), "https://example.com:8080/dir/main.js?v=1#L10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriRef<'a> {
    input: &'a str,
    components: UriComponents,
    kind: UriKind,
}

impl<'a> UriRef<'a> {
    /// Parse a URI reference. Never fails.
    pub fn parse(input: &'a str) -> Self {
        crate::parser::parse_uri_ref(input)
    }

    /// Create from source and components (internal use)
    pub(crate) fn from_parts(input: &'a str, components: UriComponents, kind: UriKind) -> Self {
        Self {
            input,
            components,
            kind,
        }
    }

    /// Get a component by range (zero-copy)
    fn get_component(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or_default()
    }

    /// Get direct access to components (for internal use)
    #[cfg(test)]
    pub(crate) fn components(&self) -> &UriComponents {
        &self.components
    }

    /// Get the source string
    pub fn as_str(&self) -> &'a str {
        self.input
    }

    /// Get the classification of this reference
    pub fn kind(&self) -> UriKind {
        self.kind
    }

    /// Check if the reference carries a "//" authority
    pub fn has_authority(&self) -> bool {
        self.components.has_authority()
    }

    /// Get the scheme, without the trailing ':'
    pub fn scheme(&self) -> Option<&'a str> {
        match self.components.protocol_end {
            0 => None,
            end => Some(self.get_component(0, end - 1)),
        }
    }

    /// Get the userinfo, without the trailing '@'
    pub fn user(&self) -> Option<&'a str> {
        if !self.components.has_authority() || !self.components.has_credentials() {
            return None;
        }
        Some(self.get_component(
            self.components.username_start(),
            self.components.username_end,
        ))
    }

    /// Get the host, including any ":port"
    pub fn host(&self) -> Option<&'a str> {
        if !self.components.has_authority() {
            return None;
        }
        Some(self.get_component(self.components.host_start, self.components.host_end))
    }

    /// Get the path (may be empty)
    pub fn path(&self) -> &'a str {
        self.get_component(
            self.components.pathname_start,
            self.components.pathname_end(self.input.len()),
        )
    }

    /// Get the query, including the leading '?'
    pub fn query(&self) -> Option<&'a str> {
        self.components
            .search_start
            .map(|start| self.get_component(start, self.components.search_end(self.input.len())))
    }

    /// Get the hash, including the leading '#'
    pub fn hash(&self) -> Option<&'a str> {
        self.components
            .hash_start
            .map(|start| self.get_component(start, self.input.len()))
    }

    /// Reassemble the components into a new string
    ///
    /// ```
    /// use resolve_uri::UriRef;
    ///
    /// assert_eq!(UriRef::parse("//cdn.com/a.js?v=1").serialize(), "//cdn.com/a.js?v=1");
    /// ```
    ///
    /// The serializer trait behind it is not exported:
    ///
    /// ```compile_fail
    /// use resolve_uri::UriBase;
    /// ```
    pub fn serialize(&self) -> String {
        UriBase::serialize(self)
    }
}

impl UriBase for UriRef<'_> {
    fn scheme(&self) -> Option<&str> {
        UriRef::scheme(self)
    }

    fn user(&self) -> Option<&str> {
        UriRef::user(self)
    }

    fn host(&self) -> Option<&str> {
        UriRef::host(self)
    }

    fn path(&self) -> &str {
        UriRef::path(self)
    }

    fn query(&self) -> Option<&str> {
        UriRef::query(self)
    }

    fn hash(&self) -> Option<&str> {
        UriRef::hash(self)
    }
}

impl core::fmt::Display for UriRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}
