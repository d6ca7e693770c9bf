//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains the zero-copy request parser.

pub mod parser;
