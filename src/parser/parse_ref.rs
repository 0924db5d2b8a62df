use super::State;
/// Single-pass reference parser: records component offsets into the source
/// string, never copies or rejects anything.
use crate::checkers::is_windows_drive_letter;
use crate::helpers::{find_authority_end, find_path_end, find_query_end, find_userinfo_end};
use crate::scheme::{SchemeType, get_scheme};
use crate::types::UriKind;
use crate::uri_components::UriComponents;
use crate::uri_ref::UriRef;

/// Classify a reference that has no scheme and no leading '/'.
fn classify_relative(bytes: &[u8]) -> UriKind {
    match bytes.first() {
        None => UriKind::Empty,
        Some(b'?') => UriKind::Query,
        Some(b'#') => UriKind::Hash,
        Some(_) => UriKind::RelativePath,
    }
}

/// Parse a URI reference into component offsets.
///
/// Every string parses: a reference without a recognizable scheme or
/// authority is a path, possibly empty, followed by optional query and hash.
pub fn parse_uri_ref(input: &str) -> UriRef<'_> {
    let bytes = input.as_bytes();
    let mut components = UriComponents::new();
    let mut kind = UriKind::Empty;
    let mut state = State::SchemeStart;
    let mut pointer = 0;

    loop {
        match state {
            State::SchemeStart => {
                if bytes.starts_with(b"//") {
                    kind = UriKind::SchemeRelative;
                    pointer = 2;
                    state = State::Authority;
                    continue;
                }

                if bytes.first() == Some(&b'/') {
                    kind = UriKind::AbsolutePath;
                    state = State::Path;
                    continue;
                }

                match get_scheme(input) {
                    Some((scheme_type, scheme_len)) => {
                        kind = UriKind::Absolute;
                        components.protocol_end = scheme_len + 1;
                        pointer = components.protocol_end;
                        state = match scheme_type {
                            SchemeType::File => State::File,
                            SchemeType::NotSpecial => {
                                pointer += 2; // Skip "//"
                                State::Authority
                            }
                        };
                    }
                    None => {
                        kind = classify_relative(bytes);
                        state = State::Path;
                    }
                }
            }

            State::File => {
                if !bytes[pointer..].starts_with(b"//") {
                    components.clear_authority(pointer);
                    state = State::Path;
                    continue;
                }

                pointer += 2;
                if is_windows_drive_letter(bytes, pointer) {
                    // "file://C:/dir": empty host, the drive letter starts the path
                    components.username_end = pointer;
                    components.host_start = pointer;
                    components.host_end = pointer;
                    state = State::Path;
                } else {
                    state = State::Authority;
                }
            }

            State::Authority => {
                let authority_end = pointer + find_authority_end(&bytes[pointer..]);

                match find_userinfo_end(&bytes[pointer..authority_end]) {
                    Some(at) => {
                        components.username_end = pointer + at;
                        components.host_start = pointer + at + 1;
                    }
                    None => {
                        components.username_end = pointer;
                        components.host_start = pointer;
                    }
                }
                components.host_end = authority_end;

                pointer = authority_end;
                state = State::Path;
            }

            State::Path => {
                if !components.has_authority() {
                    components.clear_authority(components.protocol_end);
                }
                components.pathname_start = pointer;
                pointer += find_path_end(&bytes[pointer..]);

                match bytes.get(pointer) {
                    Some(b'?') => state = State::Query,
                    Some(b'#') => state = State::Fragment,
                    _ => break,
                }
            }

            State::Query => {
                components.search_start = Some(pointer);
                pointer += find_query_end(&bytes[pointer..]);

                if pointer < bytes.len() {
                    state = State::Fragment;
                } else {
                    break;
                }
            }

            State::Fragment => {
                components.hash_start = Some(pointer);
                break;
            }
        }
    }

    UriRef::from_parts(input, components, kind)
}
