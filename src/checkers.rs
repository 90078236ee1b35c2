/// Parse a port digit run to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &[u8]) -> Option<u16> {
    if port.is_empty() {
        return None;
    }
    port.iter().try_fold(0u16, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u16::from(b - b'0'))
    })
}

/// Whether the buffer starts a relative reference (`/path...`)
pub fn is_relative(input: &[u8]) -> bool {
    input.first() == Some(&b'/')
}
