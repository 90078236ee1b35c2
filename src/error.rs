/// Errors that can occur while carving a URL, path or query buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty
    EmptyInput,
    /// Scheme delimiter `:` is missing or the scheme is empty
    InvalidScheme,
    /// Scheme is not followed by `//`
    MissingAuthority,
    /// Authority has no host
    EmptyHost,
    /// `@` with nothing before it
    EmptyUserinfo,
    /// IPv6 literal without `]`, or followed by something other than `:`
    InvalidIpv6,
    /// Port delimiter with no digits, a non-digit, or a value above 65535.
    ///
    /// Out-of-range ports are rejected rather than wrapped or truncated, which
    /// is stricter than an `atoi`-style reading of the digits.
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::MissingAuthority => "Missing \"//\" after scheme",
            Self::EmptyHost => "Empty host",
            Self::EmptyUserinfo => "Empty userinfo before \"@\"",
            Self::InvalidIpv6 => "Invalid IPv6 literal",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for carving operations
pub type Result<T> = core::result::Result<T, ParseError>;
