/// Everything that can go wrong when validating, parsing, or rendering a
/// format string.
///
/// Every variant's `Display` begins `Error in format string:`, matching the
/// single-line diagnostic shape the caller (an SQL analyzer/evaluator)
/// expects to surface verbatim.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Error in format string: {0}")]
    InvalidFormatSyntax(String),

    #[error("Error in format string: {0}")]
    InvalidFormatCombination(String),

    #[error("Error in format string: Format string too long; limit {limit}")]
    FormatTooLong { limit: usize },

    #[error("Error in format string: Format string must contain at least one of 'X','0','9'")]
    EmptyDigits,

    #[error("Error in format string: Max number of 'X' is 16")]
    HexTooLong,

    #[error("Error in format string: {0} is not implemented")]
    Unimplemented(&'static str),

    #[error("Error in format string: internal assertion failed: {0}")]
    InternalAssertion(String),
}

impl Error {
    pub(crate) fn invalid_syntax(ch: char) -> Self {
        Error::InvalidFormatSyntax(format!("Invalid format element '{}'", ch))
    }

    pub(crate) fn invalid_combination(message: impl Into<String>) -> Self {
        Error::InvalidFormatCombination(message.into())
    }
}
