//! Zero-copy HTTP/1.1 request parser and response serializer.
//!
//! Parsing takes a received buffer and fills a caller-owned [`Request`] with [`Span`]s borrowed
//! from that buffer. Header storage is supplied by the caller, so parsing never allocates.
//!
//! ```
//! use httpspan::{Header, Method, Request};
//!
//! let buf = b"GET /hello HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let mut slots = Header::slots::<8>();
//! let mut req = Request::new(&mut slots);
//!
//! assert_eq!(req.parse(buf), Ok(buf.len()));
//! assert_eq!(req.method(), Method::GET);
//! assert_eq!(req.route(), "/hello");
//! assert_eq!(req.find_header("host").map(|h| h.value.as_slice()), Some(&b"example.com"[..]));
//! ```
//!
//! Serialization flattens a [`Response`] into one exactly sized buffer.
//!
//! ```
//! use httpspan::{Header, Response, StatusCode};
//!
//! let mut slots = Header::slots::<2>();
//! let mut res = Response::new(&mut slots);
//! res.set_status(StatusCode::OK);
//! res.add_header("Content-Type", "text/plain").unwrap();
//! res.set_body(b"Hello!");
//!
//! let raw = res.to_raw().unwrap();
//! assert_eq!(&raw[..], b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello!");
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod span;
pub mod headers;
pub mod http;
pub mod h1;
pub mod request;
pub mod response;

pub use span::Span;
pub use headers::{CapacityError, Header, Headers};
pub use http::{InvalidStatusCode, Method, StatusCode};
pub use h1::parser::{Limits, ParseError, parse_request, parse_request_with};
pub use request::Request;
pub use response::{Response, SerializeError};

/// The only protocol version this crate reads and writes.
pub const SUPPORTED_VERSION: &[u8] = b"HTTP/1.1";

/// Default number of header slots, enough for typical browser requests.
pub const DEFAULT_HEADER_CAPACITY: usize = 20;

pub(crate) const CRLF: &[u8] = b"\r\n";
