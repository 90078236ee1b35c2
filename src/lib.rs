//! Zero-copy URL decomposition.
//!
//! Every operation works in place on a caller-owned `&mut [u8]` and hands back
//! disjoint views into it, without allocating:
//!
//! - [`parse`] splits a URL into a [`ParsedUrl`]
//! - [`split_path`] splits a path into its non-empty segments
//! - [`parse_query`] splits a query string into [`QueryParam`]s
//! - [`url_decode`] decodes `%XX` escapes and "+" in place
//!
//! ```
//! let mut buf = *b"http://localhost:8989/path/to/test?greet=hello%20world";
//! let url = urlcarve::parse(&mut buf)?;
//! assert_eq!(url.host.as_deref(), Some(&b"localhost"[..]));
//! assert_eq!(url.port, 8989);
//!
//! let mut params: [urlcarve::QueryParam<'_>; 4] = Default::default();
//! let query = url.query.ok_or(urlcarve::ParseError::EmptyInput)?;
//! let count = urlcarve::parse_query(query, b'&', &mut params)?;
//! assert_eq!(count, 1);
//!
//! let greet = params[0].val.as_deref_mut().map(urlcarve::url_decode);
//! assert_eq!(greet.as_deref(), Some(&b"hello world"[..]));
//! # Ok::<(), urlcarve::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod decode;
mod error;
mod helpers;
mod log;
mod parsed_url;
mod parser;
mod path;
mod query;
mod url_components;

// Public API
pub use decode::url_decode;
pub use error::{ParseError, Result};
pub use parsed_url::ParsedUrl;
pub use parser::parse;
pub use path::{PathSegments, path_segments, split_path};
pub use query::{QueryParam, QueryParams, parse_query, query_params};
