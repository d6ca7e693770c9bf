//! HTTP Request
use crate::h1::parser::{Limits, ParseError, parse_request_with};
use crate::headers::{Header, Headers};
use crate::http::Method;
use crate::span::Span;

/// Parsed HTTP Request.
///
/// Created empty by the caller, which also supplies the header storage, then populated in place
/// by [`Request::parse`]. Every span borrows the parsed buffer `'a`, header storage is borrowed
/// for `'h`.
pub struct Request<'h, 'a> {
    pub(crate) method: Method,
    pub(crate) route: Span<'a>,
    pub(crate) version: Span<'a>,
    pub(crate) headers: Headers<'h, 'a>,
    pub(crate) body: Span<'a>,
}

/// Constructor
impl<'h, 'a> Request<'h, 'a> {
    /// Create empty [`Request`] that stores parsed headers into `slots`.
    #[inline]
    pub fn new(slots: &'h mut [Header<'a>]) -> Self {
        Self {
            method: Method::UNKNOWN,
            route: Span::EMPTY,
            version: Span::EMPTY,
            headers: Headers::new(slots),
            body: Span::EMPTY,
        }
    }

    /// Parse `buf` into this request, see [`parse_request`].
    ///
    /// [`parse_request`]: crate::parse_request
    #[inline]
    pub fn parse(&mut self, buf: &'a [u8]) -> Result<usize, ParseError> {
        parse_request_with(buf, self, &Limits::DEFAULT)
    }

    /// Parse `buf` into this request with custom [`Limits`].
    #[inline]
    pub fn parse_with(&mut self, buf: &'a [u8], limits: &Limits) -> Result<usize, ParseError> {
        parse_request_with(buf, self, limits)
    }
}

impl<'h, 'a> Request<'h, 'a> {
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the request target, verbatim.
    #[inline]
    pub fn route(&self) -> &Span<'a> {
        &self.route
    }

    #[inline]
    pub fn version(&self) -> &Span<'a> {
        &self.version
    }

    #[inline]
    pub fn headers(&self) -> &Headers<'h, 'a> {
        &self.headers
    }

    /// Returns the first header named `name`, ignoring ASCII case.
    #[inline]
    pub fn find_header<N: AsRef<[u8]>>(&self, name: N) -> Option<&Header<'a>> {
        self.headers.find(name)
    }

    /// Returns every byte after the header block.
    #[inline]
    pub fn body(&self) -> &Span<'a> {
        &self.body
    }
}

impl std::fmt::Debug for Request<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("route", &self.route)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}
