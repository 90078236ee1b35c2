use crate::error::{ParseError, Result};

/// A URL split into its components.
///
/// Every component is a disjoint view into the buffer handed to
/// [`parse`](crate::parse), without its delimiter, so it can be rewritten in
/// place (for example with [`url_decode`](crate::url_decode)). The buffer
/// stays mutably borrowed for as long as the record is alive.
///
/// `scheme` and `host` are either both present (absolute URL) or both absent
/// (relative URL). `port` is 0 when no port was given.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    /// Scheme, without ":" and "//"
    pub scheme: Option<&'a mut [u8]>,
    pub username: Option<&'a mut [u8]>,
    pub password: Option<&'a mut [u8]>,
    /// Hostname, or IPv6 address without brackets
    pub host: Option<&'a mut [u8]>,
    pub port: u16,
    /// Path without its leading "/", empty if the URL ends in a bare "/"
    pub path: Option<&'a mut [u8]>,
    pub query: Option<&'a mut [u8]>,
    pub fragment: Option<&'a mut [u8]>,
}

impl<'a> ParsedUrl<'a> {
    /// Parse a URL buffer, see [`crate::parse`]
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a well-formed URL.
    pub fn parse(input: &'a mut [u8]) -> Result<Self> {
        crate::parser::parse(input)
    }

    /// Check if the URL is relative (no scheme and no authority)
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Check if URL has credentials (username, possibly empty)
    pub fn has_credentials(&self) -> bool {
        self.username.is_some()
    }

    /// Check if URL has a non-zero port
    pub fn has_port(&self) -> bool {
        self.port != 0
    }
}

impl<'a> TryFrom<&'a mut [u8]> for ParsedUrl<'a> {
    type Error = ParseError;

    fn try_from(input: &'a mut [u8]) -> Result<Self> {
        Self::parse(input)
    }
}
