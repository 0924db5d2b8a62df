use crate::compat::String;

/// Base trait for URI component sets
/// Provides the shared serializer for parsed references and resolved targets
pub(crate) trait UriBase {
    /// Get the scheme, without the trailing ':'
    fn scheme(&self) -> Option<&str>;

    /// Get the userinfo, without the trailing '@'
    fn user(&self) -> Option<&str>;

    /// Get the host, including any ":port". `Some("")` is an empty authority.
    fn host(&self) -> Option<&str>;

    /// Get the path
    fn path(&self) -> &str;

    /// Get the query (including leading ?)
    fn query(&self) -> Option<&str>;

    /// Get the hash (including leading #)
    fn hash(&self) -> Option<&str>;

    /// Get the exact length of the serialized form
    fn serialized_len(&self) -> usize {
        let mut len = self.path().len();
        if let Some(scheme) = self.scheme() {
            len += scheme.len() + 1;
        }
        if let Some(host) = self.host() {
            len += host.len() + 2;
            if let Some(user) = self.user() {
                len += user.len() + 1;
            }
        }
        len + self.query().map_or(0, str::len) + self.hash().map_or(0, str::len)
    }

    /// Append the serialized form to `buffer`.
    ///
    /// Order: scheme ":" , "//" userinfo "@" host, path, query, hash.
    /// Userinfo is only written inside an authority.
    fn serialize_into(&self, buffer: &mut String) {
        if let Some(scheme) = self.scheme() {
            buffer.push_str(scheme);
            buffer.push(':');
        }
        if let Some(host) = self.host() {
            buffer.push_str("//");
            if let Some(user) = self.user() {
                buffer.push_str(user);
                buffer.push('@');
            }
            buffer.push_str(host);
        }
        buffer.push_str(self.path());
        if let Some(query) = self.query() {
            buffer.push_str(query);
        }
        if let Some(hash) = self.hash() {
            buffer.push_str(hash);
        }
    }

    /// Serialize into a new string
    fn serialize(&self) -> String {
        let mut buffer = String::with_capacity(self.serialized_len());
        self.serialize_into(&mut buffer);
        buffer
    }
}
