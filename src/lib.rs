#![cfg_attr(not(feature = "std"), no_std)]

//! Resolve URI references the way source map consumers need to.
//!
//! [`resolve`] joins a `sources` entry onto a `sourceRoot` or map URL. It
//! follows web URL resolution while accepting the partial forms source maps
//! are full of: no scheme, no authority, empty strings, bare `?query` and
//! `#hash`, and relative bases. Excess `..` segments survive in relative
//! results instead of being clamped, and relative results keep a leading
//! `./` when the base had one.
//!
//! ```
//! use resolve_uri::resolve;
//!
//! assert_eq!(
//!     resolve("https://absolute.com/foo/./bar/../main.js.map", None),
//!     "https://absolute.com/foo/main.js.map"
//! );
//! assert_eq!(resolve("bar/main.js.map", Some("deep/dir/")), "deep/dir/bar/main.js.map");
//! assert_eq!(resolve("/foo/./bar/../main.js.map", Some("/root/")), "/foo/main.js.map");
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod helpers;
mod normalize;
mod parser;
mod resolve;
mod scheme;
mod types;
mod uri_base;
mod uri_components;
mod uri_ref;

// Public API
pub use normalize::normalize_path;
pub use resolve::resolve;
pub use types::UriKind;
pub use uri_ref::UriRef;
