/// Marker for bytes that are not hex digits
const NOT_HEX: u8 = 0xFF;

/// Hex digit values, `NOT_HEX` for everything else
const HEX_TABLE: [u8; 256] = {
    let mut table = [NOT_HEX; 256];

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = i - b'0';
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] = i - b'a' + 10;
        table[(i - 32) as usize] = i - b'a' + 10;
        i += 1;
    }

    table
};

/// Value of a case-insensitive hex digit
pub fn hex_value(b: u8) -> Option<u8> {
    match HEX_TABLE[b as usize] {
        NOT_HEX => None,
        value => Some(value),
    }
}

/// Decode the `XX` of a `%XX` escape
pub fn decode_hex_pair(high: u8, low: u8) -> Option<u8> {
    Some((hex_value(high)? << 4) | hex_value(low)?)
}
