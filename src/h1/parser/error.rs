use crate::headers::CapacityError;

/// HTTP Parsing error.
///
/// Every variant is a hard failure, the parser never guesses intent on ambiguous input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input buffer is empty.
    #[error("empty input")]
    EmptyInput,
    /// Request line is missing a space between its tokens.
    #[error("missing separator in request line")]
    MissingSeparator,
    /// Method token is empty.
    #[error("invalid method")]
    InvalidMethod,
    /// Method token exceeds the configured maximum.
    #[error("method too long")]
    MethodTooLong,
    /// Buffer ends before the line terminator.
    #[error("unterminated line")]
    UnterminatedLine,
    /// `\r` is not followed by `\n`.
    #[error("invalid separator")]
    InvalidSeparator,
    /// Version is not exactly `HTTP/1.1`.
    #[error("unsupported version")]
    UnsupportedVersion,
    /// Line exceeds the configured maximum.
    #[error("line too long")]
    TooLong,
    /// Header line starts with whitespace, obsolete line folding is not supported.
    #[error("header line starts with whitespace")]
    LeadingWhitespace,
    /// Header line does not contain `:`.
    #[error("missing colon in header line")]
    MissingColon,
    /// Header name is empty.
    #[error("empty header name")]
    EmptyHeaderName,
    /// Header storage is full.
    #[error(transparent)]
    TooManyHeaders(#[from] CapacityError),
}
