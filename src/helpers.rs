/// Find the end of an authority: the first '/', '?' or '#', or end of input.
/// Optimization: Uses SIMD-accelerated memchr3
pub fn find_authority_end(input: &[u8]) -> usize {
    memchr::memchr3(b'/', b'?', b'#', input).unwrap_or(input.len())
}

/// Find the end of a path: the first '?' or '#', or end of input.
pub fn find_path_end(input: &[u8]) -> usize {
    memchr::memchr2(b'?', b'#', input).unwrap_or(input.len())
}

/// Find the end of a query: the first '#', or end of input.
pub fn find_query_end(input: &[u8]) -> usize {
    memchr::memchr(b'#', input).unwrap_or(input.len())
}

/// Find the '@' that closes userinfo inside an authority, if any.
/// The first '@' wins; anything after it belongs to the host.
pub fn find_userinfo_end(authority: &[u8]) -> Option<usize> {
    memchr::memchr(b'@', authority)
}

/// Strip the filename from a rooted path, leaving its directory with a
/// trailing '/'. A path ending in an unresolved ".." has no filename.
pub fn strip_path_filename(path: &str) -> &str {
    if crate::checkers::ends_with_parent(path) {
        return path;
    }
    memchr::memrchr(b'/', path.as_bytes()).map_or("", |pos| &path[..=pos])
}
