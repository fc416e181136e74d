use crate::kind::Kind;

/// One option value that could not be converted to its declared kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "bad argument {token}: option (-{letter}, --{name}, {kind}) cannot convert value '{value}'",
    letter = .short.unwrap_or(' '),
    name = .long.as_deref().unwrap_or("")
)]
pub struct BadValue {
    pub short: Option<char>,
    pub long: Option<String>,
    pub kind: Kind,
    pub token: String,
    pub value: String,
}

/// The outcome of a parse that hit at least one unconvertible value.
///
/// Every token is still processed; this collects all failures in order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} option value(s) could not be converted", .failures.len())]
pub struct ParseError {
    pub failures: Vec<BadValue>,
}

pub type Result<T> = std::result::Result<T, ParseError>;
