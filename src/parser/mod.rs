mod authority;

use crate::checkers::is_relative;
use crate::error::{ParseError, Result};
use crate::helpers::cut;
use crate::log::debug;
use crate::parsed_url::ParsedUrl;
use crate::url_components::UrlComponents;

/// Split a URL buffer into its components without copying.
///
/// Accepted forms:
///
/// ```text
/// absolute = scheme ":" "//" [ userinfo "@" ] host [ ":" port ] [ "/" path ] [ "?" query ] [ "#" fragment ]
/// relative = "/" path [ "?" query ] [ "#" fragment ]
/// ```
///
/// The returned views borrow `input` mutably and do not overlap.
///
/// # Errors
///
/// Returns an error for an empty buffer, a missing or empty scheme,
/// a scheme not followed by "//", an empty host, an "@" with nothing before it,
/// an unterminated IPv6 literal, or a port that is not a decimal `u16`.
pub fn parse(input: &mut [u8]) -> Result<ParsedUrl<'_>> {
    match scan(input) {
        Ok(components) => Ok(components.carve(input)),
        Err(err) => {
            debug!("rejecting url: {err}");
            Err(err)
        }
    }
}

/// Find the component ranges of `input`.
///
/// Later steps only search what earlier steps left over:
/// fragment, then query, then scheme, authority and path.
fn scan(input: &[u8]) -> Result<UrlComponents> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut out = UrlComponents::new();

    let (rest, fragment) = cut(input, 0..input.len(), b'#');
    out.fragment = fragment;

    let (rest, query) = cut(input, rest, b'?');
    out.query = query;

    if is_relative(&input[rest.clone()]) {
        out.path = Some(rest.start + 1..rest.end);
        return Ok(out);
    }

    let (scheme, after_scheme) = cut(input, rest, b':');
    let after_scheme = match after_scheme {
        Some(after) if !scheme.is_empty() => after,
        _ => return Err(ParseError::InvalidScheme),
    };
    if !input[after_scheme.clone()].starts_with(b"//") {
        return Err(ParseError::MissingAuthority);
    }
    out.scheme = Some(scheme);

    let (authority, path) = cut(input, after_scheme.start + 2..after_scheme.end, b'/');
    out.path = path;

    authority::parse_authority(input, authority, &mut out)?;

    Ok(out)
}
