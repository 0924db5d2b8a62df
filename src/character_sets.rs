/// Characters accepted in a scheme: ASCII alphanumerics, `_`, `+`, `.`, `-`
const SCHEME_CHAR_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'_' as usize] = true;
    table[b'+' as usize] = true;
    table[b'.' as usize] = true;
    table[b'-' as usize] = true;

    table
};

/// Check if a byte may appear in a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize]
}

/// Check if a character marks a reference that must stay visibly relative
/// when it leads a string: `.`, `?` or `#`
pub fn is_relative_marker(b: u8) -> bool {
    matches!(b, b'.' | b'?' | b'#')
}
