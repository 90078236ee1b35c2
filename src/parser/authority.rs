use crate::checkers::parse_port;
use crate::error::{ParseError, Result};
use crate::helpers::cut;
use crate::url_components::UrlComponents;
use core::ops::Range;

/// Parse `[userinfo "@"] host [":" port]` within `authority`,
/// the region between "//" and the first "/" (or the end of the URL).
pub fn parse_authority(
    input: &[u8],
    authority: Range<usize>,
    out: &mut UrlComponents,
) -> Result<()> {
    let starts_with = |range: &Range<usize>, byte| input[range.clone()].first() == Some(&byte);

    // A bracketed literal owns the whole authority, "@" included
    let (host, port) = if starts_with(&authority, b'[') {
        split_ipv6_literal(input, authority)?
    } else {
        let (userinfo, host) = cut(input, authority, b'@');
        let host = match host {
            Some(host) => {
                if userinfo.is_empty() {
                    return Err(ParseError::EmptyUserinfo);
                }
                let (username, password) = cut(input, userinfo, b':');
                out.username = Some(username);
                out.password = password;
                host
            }
            // No "@": the whole authority is host and port
            None => userinfo,
        };

        if starts_with(&host, b'[') {
            split_ipv6_literal(input, host)?
        } else {
            cut(input, host, b':')
        }
    };

    if host.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    out.host = Some(host);

    if let Some(port) = port {
        out.port = parse_port(&input[port]).ok_or(ParseError::InvalidPort)?;
    }

    Ok(())
}

/// Split `"[" address "]" [":" port]` into the address (without brackets)
/// and the port digits.
fn split_ipv6_literal(
    input: &[u8],
    host: Range<usize>,
) -> Result<(Range<usize>, Option<Range<usize>>)> {
    let (address, rest) = cut(input, host.start + 1..host.end, b']');
    let rest = rest.ok_or(ParseError::InvalidIpv6)?;

    match input[rest.clone()].first() {
        None => Ok((address, None)),
        Some(b':') => Ok((address, Some(rest.start + 1..rest.end))),
        Some(_) => Err(ParseError::InvalidIpv6),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn authority(input: &[u8]) -> Result<UrlComponents> {
        let mut out = UrlComponents::new();
        parse_authority(input, 0..input.len(), &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_host_only() {
        let out = authority(b"example.com").unwrap();
        assert_eq!(out.host, Some(0..11));
        assert_eq!(out.username, None);
        assert_eq!(out.port, 0);
    }

    #[test]
    fn test_userinfo() {
        let out = authority(b"u:p@h").unwrap();
        assert_eq!(out.username, Some(0..1));
        assert_eq!(out.password, Some(2..3));
        assert_eq!(out.host, Some(4..5));

        let out = authority(b"u@h:1").unwrap();
        assert_eq!(out.username, Some(0..1));
        assert_eq!(out.password, None);
        assert_eq!(out.port, 1);

        // A lone ":" still makes a (blank) username and password
        let out = authority(b":@h").unwrap();
        assert_eq!(out.username, Some(0..0));
        assert_eq!(out.password, Some(1..1));
    }

    #[test]
    fn test_ipv6_literal() {
        let out = authority(b"[::1]:443").unwrap();
        assert_eq!(out.host, Some(1..4));
        assert_eq!(out.port, 443);

        let out = authority(b"u@[::1]").unwrap();
        assert_eq!(out.host, Some(3..6));
        assert_eq!(out.port, 0);

        // "@" inside the brackets is part of the address
        let out = authority(b"[a@b]:80").unwrap();
        assert_eq!(out.host, Some(1..4));
        assert_eq!(out.username, None);
        assert_eq!(out.port, 80);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(authority(b"").unwrap_err(), ParseError::EmptyHost);
        assert_eq!(authority(b":80").unwrap_err(), ParseError::EmptyHost);
        assert_eq!(authority(b"@h").unwrap_err(), ParseError::EmptyUserinfo);
        assert_eq!(authority(b"u@").unwrap_err(), ParseError::EmptyHost);
        assert_eq!(authority(b"h:").unwrap_err(), ParseError::InvalidPort);
        assert_eq!(authority(b"h:8o").unwrap_err(), ParseError::InvalidPort);
        assert_eq!(authority(b"h:1:2").unwrap_err(), ParseError::InvalidPort);
        assert_eq!(authority(b"[::1").unwrap_err(), ParseError::InvalidIpv6);
        assert_eq!(authority(b"[::1]x").unwrap_err(), ParseError::InvalidIpv6);
        assert_eq!(authority(b"[::1]:").unwrap_err(), ParseError::InvalidPort);
        assert_eq!(authority(b"[]").unwrap_err(), ParseError::EmptyHost);
        assert_eq!(authority(b"[::1]@h").unwrap_err(), ParseError::InvalidIpv6);
        assert_eq!(authority(b"[::1]:80@h").unwrap_err(), ParseError::InvalidPort);
    }
}
