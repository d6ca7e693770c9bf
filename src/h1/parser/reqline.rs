use super::{Limits, ParseError, matches};
use crate::SUPPORTED_VERSION;
use crate::http::Method;
use crate::span::Span;

/// Parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reqline<'a> {
    pub method: Method,
    /// Request target, verbatim.
    pub target: Span<'a>,
    pub version: Span<'a>,
}

/// Parse the request line at the start of `buf`.
///
/// On success returns the line and the number of bytes consumed, including the terminating
/// `\r\n`.
///
/// The request target is not decoded nor validated. The version must be exactly `HTTP/1.1`.
pub fn parse_reqline<'a>(buf: &'a [u8], limits: &Limits) -> Result<(Reqline<'a>, usize), ParseError> {
    let line = {
        let window = &buf[..buf.len().min(limits.max_line_len().saturating_add(1))];

        let Some(cr) = matches::find_byte(window, b'\r') else {
            let beyond = &buf[window.len()..];
            return Err(match matches::find_byte(beyond, b'\r').is_some() {
                true => ParseError::TooLong,
                false => ParseError::UnterminatedLine,
            });
        };

        match buf.get(cr + 1) {
            Some(b'\n') => {},
            Some(_) => return Err(ParseError::InvalidSeparator),
            None => return Err(ParseError::UnterminatedLine),
        }

        &buf[..cr]
    };

    let (method, rest) = {
        let window = &line[..line.len().min(limits.max_method_len().saturating_add(1))];

        let Some(sp) = matches::find_byte(window, b' ') else {
            return Err(match window.len() < line.len() {
                true => ParseError::MethodTooLong,
                false => ParseError::MissingSeparator,
            });
        };

        if sp == 0 {
            return Err(ParseError::InvalidMethod);
        }

        (Method::from_bytes(&line[..sp]), &line[sp + 1..])
    };

    let Some(sp) = matches::find_byte(rest, b' ') else {
        return Err(ParseError::MissingSeparator);
    };
    let (target, version) = (&rest[..sp], &rest[sp + 1..]);

    if version != SUPPORTED_VERSION {
        return Err(ParseError::UnsupportedVersion);
    }

    let reqline = Reqline {
        method,
        target: Span::Borrowed(target),
        version: Span::Borrowed(version),
    };

    Ok((reqline, line.len() + crate::CRLF.len()))
}
