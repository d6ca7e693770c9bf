//! HTTP/1.1 Parser.
//!
//! [`parse_request`] runs a single linear pass over a complete buffer: the request line, then
//! one header per line until an empty line, then everything left is the body. Each phase either
//! completes or fails the whole parse, no state is kept between calls.
//!
//! All parsed values are [`Span::Borrowed`] views into the input buffer, and headers are
//! written into caller supplied storage, so parsing does not allocate.
//!
//! The body is not framed. `Content-Length` is not cross-checked and chunked coding is not
//! decoded, that policy belongs to the caller.
//!
//! [`Span::Borrowed`]: crate::Span::Borrowed
mod matches;
mod limits;
mod error;
mod reqline;
mod header;

use crate::http::Method;
use crate::log::{debug, trace};
use crate::request::Request;
use crate::span::Span;
use crate::CRLF;

pub use limits::Limits;
pub use error::ParseError;
pub use reqline::{Reqline, parse_reqline};
pub use header::parse_header_line;

#[cfg(test)]
mod test;

/// Parse a complete request from `buf` into `dest` using [`Limits::DEFAULT`].
///
/// See [`parse_request_with`].
#[inline]
pub fn parse_request<'a>(buf: &'a [u8], dest: &mut Request<'_, 'a>) -> Result<usize, ParseError> {
    parse_request_with(buf, dest, &Limits::DEFAULT)
}

/// Parse a complete request from `buf` into `dest`.
///
/// Returns the number of bytes consumed, which is always `buf.len()` since the body spans every
/// byte after the header block. Header scanning also stops when no further line terminator is
/// found, the remaining bytes then become the body.
///
/// Every field of `dest` is reset first. On error `dest` may be partially populated, but never
/// holds fields of a previous parse.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] for an empty buffer, and the corresponding error for a
/// malformed request line, a malformed header line, or full header storage.
pub fn parse_request_with<'a>(
    buf: &'a [u8],
    dest: &mut Request<'_, 'a>,
    limits: &Limits,
) -> Result<usize, ParseError> {
    let result = parse(buf, dest, limits);
    if let Err(_err) = &result {
        debug!("rejected request: {_err}");
    }
    result
}

fn parse<'a>(buf: &'a [u8], dest: &mut Request<'_, 'a>, limits: &Limits) -> Result<usize, ParseError> {
    dest.method = Method::UNKNOWN;
    dest.route = Span::EMPTY;
    dest.version = Span::EMPTY;
    dest.headers.clear();
    dest.body = Span::EMPTY;

    if buf.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // ===== Request Line =====

    let (reqline, mut offset) = parse_reqline(buf, limits)?;

    trace!("parsed request line {} {:?}", reqline.method, reqline.target);

    dest.method = reqline.method;
    dest.route = reqline.target;
    dest.version = reqline.version;

    // ===== Headers =====

    while offset < buf.len() {
        let rest = &buf[offset..];
        let window = &rest[..rest.len().min(limits.max_line_len().saturating_add(CRLF.len()))];

        let Some(end) = matches::find_crlf(window) else {
            // only a terminated line can exceed the budget
            if window.len() < rest.len() && matches::find_crlf(rest).is_some() {
                return Err(ParseError::TooLong);
            }
            break;
        };

        if end == 0 {
            offset += CRLF.len();
            break;
        }

        let header = parse_header_line(&rest[..end])?;
        trace!("parsed header {header:?}");
        dest.headers.append(header)?;

        offset += end + CRLF.len();
    }

    // ===== Body =====

    dest.body = Span::Borrowed(&buf[offset..]);

    Ok(buf.len())
}
