//! Reference resolution.

use crate::checkers::starts_relative;
use crate::compat::{Cow, String, trace};
use crate::helpers::strip_path_filename;
use crate::normalize::normalize_path;
use crate::types::UriKind;
use crate::uri_base::UriBase;
use crate::uri_ref::UriRef;

/// The path of a reference with a root prepended when it has none, so
/// every kind normalizes the same way.
fn rooted_path<'a>(uri: &UriRef<'a>) -> Cow<'a, str> {
    let path = uri.path();
    if path.starts_with('/') {
        return Cow::Borrowed(path);
    }
    let mut rooted = String::with_capacity(path.len() + 1);
    rooted.push('/');
    rooted.push_str(path);
    Cow::Owned(rooted)
}

/// Merge an input path onto the directory of its base path.
/// An input without a path takes the base path as is.
fn merge_paths<'a>(input: &UriRef<'a>, base: &UriRef<'a>) -> Cow<'a, str> {
    let base_path = normalize_path(&rooted_path(base), base.kind());
    if input.path().is_empty() {
        return Cow::Owned(base_path);
    }

    let directory = strip_path_filename(&base_path);
    let input_path = rooted_path(input);
    let mut merged = String::with_capacity(directory.len() + input_path.len());
    merged.push_str(directory);
    merged.push_str(&input_path);
    Cow::Owned(merged)
}

/// Components of a resolution result, chosen field by field from the input
/// and its base. The path stays rooted until [`Target::finish`].
#[derive(Debug)]
struct Target<'a> {
    scheme: Option<&'a str>,
    user: Option<&'a str>,
    host: Option<&'a str>,
    path: Cow<'a, str>,
    query: Option<&'a str>,
    hash: Option<&'a str>,
    /// Prefix "./" so a relative result never reads as another kind
    dot_slash: bool,
}

impl<'a> Target<'a> {
    fn from_ref(uri: &UriRef<'a>) -> Self {
        Self {
            scheme: uri.scheme(),
            user: uri.user(),
            host: uri.host(),
            path: rooted_path(uri),
            query: uri.query(),
            hash: uri.hash(),
            dot_slash: false,
        }
    }

    /// Take from `base` everything a reference of the input's kind lacks.
    /// Each kind inherits a subset of what every weaker kind inherits.
    fn inherit(&mut self, input: &UriRef<'a>, base: &UriRef<'a>) {
        let kind = input.kind();
        if kind == UriKind::Empty {
            self.hash = base.hash();
        }
        if kind <= UriKind::Hash {
            self.query = base.query();
        }
        if kind <= UriKind::RelativePath {
            self.path = merge_paths(input, base);
        }
        if kind <= UriKind::AbsolutePath {
            // Userinfo and host travel together
            self.user = base.user();
            self.host = base.host();
        }
        if kind < UriKind::Absolute {
            self.scheme = base.scheme();
        }
    }

    /// Shape the components for the output `kind`, given the normalized
    /// rooted path. `reference` is the string whose leading character
    /// decides whether a relative result needs "./".
    fn finish(mut self, kind: UriKind, mut path: String, reference: &str) -> String {
        match kind {
            UriKind::Empty | UriKind::Hash | UriKind::Query => {
                self.scheme = None;
                self.user = None;
                self.host = None;
                path.clear();
            }
            UriKind::RelativePath => {
                self.scheme = None;
                self.user = None;
                self.host = None;
                if path.starts_with('/') {
                    path.remove(0);
                }
                if path.is_empty() {
                    if self.query.is_none() && self.hash.is_none() {
                        path.push('.');
                    }
                } else {
                    self.dot_slash = starts_relative(reference) && !starts_relative(&path);
                }
            }
            UriKind::AbsolutePath => {
                self.scheme = None;
                self.user = None;
                self.host = None;
            }
            UriKind::SchemeRelative | UriKind::Absolute => {
                // "file:/x" and "file:x" have no "//" of their own
                if self.host.is_none() {
                    self.host = Some("");
                }
            }
        }
        self.path = Cow::Owned(path);

        let dot_slash = if self.dot_slash { "./" } else { "" };
        let mut buffer = String::with_capacity(dot_slash.len() + self.serialized_len());
        buffer.push_str(dot_slash);
        self.serialize_into(&mut buffer);
        buffer
    }
}

impl UriBase for Target<'_> {
    fn scheme(&self) -> Option<&str> {
        self.scheme
    }

    fn user(&self) -> Option<&str> {
        self.user
    }

    fn host(&self) -> Option<&str> {
        self.host
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> Option<&str> {
        self.query
    }

    fn hash(&self) -> Option<&str> {
        self.hash
    }
}

/// Resolve `input` against an optional `base`.
///
/// Both strings may be anything: absolute URLs, protocol-relative or
/// path-absolute references, relative paths, bare queries or fragments, or
/// empty. An empty base is the same as no base. The function never fails.
///
/// - An absolute `input` only has its path normalized; the base is ignored.
/// - Otherwise `input` inherits, by kind, the base scheme, authority, path
///   directory, query and hash it lacks, and the result takes the form of
///   the stronger of the two references.
/// - `.` and `..` are collapsed. Excess `..` stay in relative results and
///   are dropped at the root of absolute ones.
/// - A relative result keeps a leading "./" when the base (or, without a
///   base, the input) starts with `.`, `?` or `#`.
///
/// # Examples
///
/// ```
/// use resolve_uri::resolve;
///
/// assert_eq!(
///     resolve("../bar/main.js.map", Some("https://foo.com/dir/file")),
///     "https://foo.com/bar/main.js.map"
/// );
/// assert_eq!(
///     resolve("//cdn.com/main.js.map", Some("https://foo.com")),
///     "https://cdn.com/main.js.map"
/// );
/// assert_eq!(resolve("foo/../../../bar.js", Some("dir/")), "../bar.js");
/// assert_eq!(resolve("bar.js", Some("./dir/")), "./dir/bar.js");
/// assert_eq!(resolve("#input", Some("?baseQuery")), "?baseQuery#input");
/// ```
pub fn resolve(input: &str, base: Option<&str>) -> String {
    let base = base.filter(|base| !base.is_empty());
    if input.is_empty() && base.is_none() {
        return String::new();
    }

    let input_ref = UriRef::parse(input);
    let mut target = Target::from_ref(&input_ref);
    let mut kind = input_ref.kind();

    if let Some(base) = base.filter(|_| kind != UriKind::Absolute) {
        let base_ref = UriRef::parse(base);
        target.inherit(&input_ref, &base_ref);
        kind = kind.max(base_ref.kind());
        trace!(
            input_kind = ?input_ref.kind(),
            base_kind = ?base_ref.kind(),
            kind = ?kind,
            "merged reference with base"
        );
    }

    let path = normalize_path(&target.path, kind);
    target.finish(kind, path, base.unwrap_or(input))
}
