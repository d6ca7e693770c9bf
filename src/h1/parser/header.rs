use super::{ParseError, matches};
use crate::headers::Header;
use crate::span::Span;

/// Parse a single header line, `line` excludes its terminator.
///
/// The name is everything before the first colon, taken verbatim. The value is everything after
/// it with leading whitespace removed, trailing whitespace is kept.
///
/// A line starting with whitespace is rejected, obsolete line folding is not supported.
pub fn parse_header_line(line: &[u8]) -> Result<Header<'_>, ParseError> {
    match line.first() {
        Some(byte) if matches::is_whitespace(*byte) => return Err(ParseError::LeadingWhitespace),
        Some(_) => {},
        None => return Err(ParseError::MissingColon),
    }

    let Some(colon) = matches::find_byte(line, b':') else {
        return Err(ParseError::MissingColon);
    };

    if colon == 0 {
        return Err(ParseError::EmptyHeaderName);
    }

    Ok(Header {
        name: Span::Borrowed(&line[..colon]),
        value: Span::Borrowed(matches::trim_start(&line[colon + 1..])),
    })
}
