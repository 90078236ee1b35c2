use core::ops::Range;

/// Cut `region` of `input` at the first `delim`.
/// Returns (`before`, `after`), where `after` excludes the delimiter
/// and is `None` if the delimiter does not occur in `region`.
/// Optimization: Uses SIMD-accelerated memchr for the search
pub fn cut(input: &[u8], region: Range<usize>, delim: u8) -> (Range<usize>, Option<Range<usize>>) {
    match memchr::memchr(delim, &input[region.clone()]) {
        Some(pos) => {
            let at = region.start + pos;
            (region.start..at, Some(at + 1..region.end))
        }
        None => (region, None),
    }
}

/// Index of the first byte in `input` that is not `byte`
pub fn skip_run(input: &[u8], byte: u8) -> Option<usize> {
    input.iter().position(|&b| b != byte)
}
