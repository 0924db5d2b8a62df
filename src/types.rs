/// Classification of a URI reference, ordered from weakest to strongest.
///
/// The order matters to resolution: an input inherits from its base every
/// component that a stronger kind would have supplied, and the resolved
/// output takes the form of whichever of input and base is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum UriKind {
    /// The empty string
    #[default]
    Empty,
    /// Only a fragment, e.g. `#section`
    Hash,
    /// A query with an optional fragment, e.g. `?a=1#b`
    Query,
    /// A path that does not start with `/`, e.g. `../lib/main.js`
    RelativePath,
    /// A path starting with a single `/`
    AbsolutePath,
    /// An authority without a scheme, e.g. `//cdn.example.com/x.js`
    SchemeRelative,
    /// A scheme, e.g. `https://example.com/` or `file:/tmp/x.js`
    Absolute,
}

impl UriKind {
    /// Excess `..` segments survive normalization only for these kinds,
    /// since their root is not known to the resolver.
    pub fn is_relative(self) -> bool {
        self <= Self::RelativePath
    }

    /// Kinds serialized with a `//` authority marker.
    pub fn has_authority(self) -> bool {
        self >= Self::SchemeRelative
    }
}
