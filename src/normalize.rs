//! Dot-segment normalization for rooted paths.

use crate::checkers::ends_with_parent;
use crate::compat::{String, Vec};
use crate::types::UriKind;

enum SegKind {
    Empty,
    Dot,
    DoubleDot,
    Normal,
}

fn classify_segment(seg: &str) -> SegKind {
    match seg {
        "" => SegKind::Empty,
        "." => SegKind::Dot,
        ".." => SegKind::DoubleDot,
        _ => SegKind::Normal,
    }
}

/// Collapse `.` and `..` segments of a rooted path.
///
/// The result is always rooted. A `path` without a leading '/' is treated
/// as if it had one, so relative references normalize against a virtual
/// root. Empty segments are dropped. A `..` that has no
/// real segment to pop is kept literally when `kind` is relative, since
/// the real root is unknown, and dropped otherwise, since nothing sits
/// above '/'. The result keeps a trailing '/' whenever the last segment was
/// empty, `.` or a popping `..`, except after a literal `..`.
///
/// Normalizing an already normalized path returns it unchanged.
///
/// # Examples
///
/// ```
/// use resolve_uri::{UriKind, normalize_path};
///
/// assert_eq!(normalize_path("/foo/./bar/../main.js", UriKind::Absolute), "/foo/main.js");
/// assert_eq!(normalize_path("/../../a", UriKind::AbsolutePath), "/a");
/// assert_eq!(normalize_path("/../../a", UriKind::RelativePath), "/../../a");
/// assert_eq!(normalize_path("/a/b/..", UriKind::RelativePath), "/a/");
/// ```
pub fn normalize_path(path: &str, kind: UriKind) -> String {
    let keep_excess_parents = kind.is_relative();

    let mut stack: Vec<&str> = Vec::new();
    // Real segments on the stack; literal ".." only ever sits below them.
    let mut positive = 0usize;
    let mut trailing_slash = false;

    let segments = path.strip_prefix('/').unwrap_or(path);
    for segment in segments.split('/') {
        match classify_segment(segment) {
            SegKind::Empty | SegKind::Dot => trailing_slash = true,
            SegKind::DoubleDot => {
                if positive > 0 {
                    stack.pop();
                    positive -= 1;
                    trailing_slash = true;
                } else {
                    if keep_excess_parents {
                        stack.push(segment);
                    }
                    trailing_slash = false;
                }
            }
            SegKind::Normal => {
                stack.push(segment);
                positive += 1;
                trailing_slash = false;
            }
        }
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in &stack {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() || (trailing_slash && !ends_with_parent(&normalized)) {
        normalized.push('/');
    }
    normalized
}
