use crate::helpers::skip_run;
use crate::log::trace;
use core::iter::FusedIterator;
use core::mem;

/// Iterator over the non-empty segments of a path buffer.
///
/// Leading, trailing and repeated "/" never produce a segment.
/// Created by [`path_segments`].
#[derive(Debug, Default)]
pub struct PathSegments<'a> {
    rest: &'a mut [u8],
}

/// Lazily split `path` on "/".
pub fn path_segments(path: &mut [u8]) -> PathSegments<'_> {
    PathSegments { rest: path }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = &'a mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = mem::take(&mut self.rest);
        let start = skip_run(rest, b'/')?;
        let rest = &mut rest[start..];

        let end = memchr::memchr(b'/', rest).unwrap_or(rest.len());
        let (segment, tail) = rest.split_at_mut(end);
        self.rest = tail;
        Some(segment)
    }
}

impl FusedIterator for PathSegments<'_> {}

/// Split `path` into at most `out.len()` segments, stored in order in `out`.
///
/// Returns the number of segments written. Segments beyond the capacity of
/// `out` are silently dropped; an empty or all-"/" path yields 0.
pub fn split_path<'a>(path: &'a mut [u8], out: &mut [&'a mut [u8]]) -> usize {
    let mut segments = path_segments(path);
    let mut count = 0;

    for (slot, segment) in out.iter_mut().zip(&mut segments) {
        *slot = segment;
        count += 1;
    }

    if count == out.len() && segments.rest.iter().any(|&b| b != b'/') {
        trace!("path truncated after {count} segments");
    }

    count
}
