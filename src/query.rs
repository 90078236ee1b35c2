use crate::error::{ParseError, Result};
use crate::log::trace;
use core::iter::FusedIterator;

/// One `key[=val]` segment of a query string.
///
/// `val` is `None` when the segment has no "=", which is distinct from
/// `Some` of an empty value (`key=`).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryParam<'a> {
    pub key: &'a mut [u8],
    pub val: Option<&'a mut [u8]>,
}

impl<'a> QueryParam<'a> {
    /// Split one segment on its first "="
    fn from_segment(segment: &'a mut [u8]) -> Self {
        match memchr::memchr(b'=', segment) {
            Some(pos) => {
                let (key, val) = segment.split_at_mut(pos);
                Self {
                    key,
                    val: Some(&mut val[1..]),
                }
            }
            None => Self {
                key: segment,
                val: None,
            },
        }
    }
}

/// Iterator over the delimiter-separated segments of a query buffer.
///
/// Every segment counts, including empty ones produced by leading,
/// trailing or doubled delimiters. Created by [`query_params`].
#[derive(Debug)]
pub struct QueryParams<'a> {
    rest: Option<&'a mut [u8]>,
    delimiter: u8,
}

/// Lazily split `query` on `delimiter`. An empty buffer yields nothing.
pub fn query_params(query: &mut [u8], delimiter: u8) -> QueryParams<'_> {
    QueryParams {
        rest: if query.is_empty() { None } else { Some(query) },
        delimiter,
    }
}

impl<'a> Iterator for QueryParams<'a> {
    type Item = QueryParam<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        let segment = match memchr::memchr(self.delimiter, rest) {
            Some(pos) => {
                let (segment, tail) = rest.split_at_mut(pos);
                self.rest = Some(&mut tail[1..]);
                segment
            }
            None => rest,
        };
        Some(QueryParam::from_segment(segment))
    }
}

impl FusedIterator for QueryParams<'_> {}

/// Split `query` into at most `out.len()` parameters, stored in order in `out`.
///
/// Returns the number of parameters written; anything past the capacity of
/// `out` is silently discarded.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] if `query` is empty.
pub fn parse_query<'a>(
    query: &'a mut [u8],
    delimiter: u8,
    out: &mut [QueryParam<'a>],
) -> Result<usize> {
    if query.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut params = query_params(query, delimiter);
    let mut count = 0;

    for (slot, param) in out.iter_mut().zip(&mut params) {
        *slot = param;
        count += 1;
    }

    if params.rest.is_some() {
        trace!("query truncated after {count} parameters");
    }

    Ok(count)
}
