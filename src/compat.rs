/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{borrow::Cow, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{borrow::Cow, string::String, vec::Vec};

/// Emit a `trace`-level event when the `tracing` feature is enabled.
/// Expands to nothing otherwise, so call sites cost nothing by default.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;
