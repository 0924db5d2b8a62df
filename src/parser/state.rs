/// URI reference parser state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Scheme start state: classifies the reference by its prefix
    SchemeStart,
    /// File state: after "file:", where "//" is optional
    File,
    /// Authority state: userinfo and host (with port) after "//"
    Authority,
    /// Path state
    Path,
    /// Query state
    Query,
    /// Fragment state
    Fragment,
}
