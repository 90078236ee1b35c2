/// Fixture loader
///
/// Parse cases are kept in `parse_cases.json` as a flat array of objects,
/// with plain strings acting as section comments.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case; absent keys mean absent components
    UrlTest {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        /// Expected `ParseError` variant name
        #[serde(default)]
        failure: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

pub fn load_parse_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("parse_cases.json")).unwrap()
}
