use crate::character_sets::decode_hex_pair;

/// Decode `%XX` escapes and "+" in place.
///
/// "+" becomes a space and `%` followed by two hex digits (either case)
/// becomes the byte they encode. Everything else, malformed escapes
/// included, is copied through unchanged. Returns the decoded prefix of
/// `input`; bytes after it are left over from the encoded form.
///
/// Decoding is not idempotent: a `%` that survives one pass (as in
/// `%2541`, which decodes to `%41`) is decoded again by a second pass.
pub fn url_decode(input: &mut [u8]) -> &mut [u8] {
    // Fast path: nothing to decode
    let Some(first) = memchr::memchr2(b'%', b'+', input) else {
        return input;
    };

    let len = input.len();
    let mut read = first;
    let mut write = first;

    while read < len {
        let (byte, consumed) = match input[read] {
            b'+' => (b' ', 1),
            b'%' => match input.get(read + 1..read + 3) {
                Some(&[high, low]) => {
                    decode_hex_pair(high, low).map_or((b'%', 1), |decoded| (decoded, 3))
                }
                _ => (b'%', 1),
            },
            other => (other, 1),
        };
        input[write] = byte;
        write += 1;
        read += consumed;
    }

    &mut input[..write]
}
