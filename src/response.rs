//! HTTP Response
use bytes::Bytes;

use crate::headers::{CapacityError, Header, Headers};
use crate::http::StatusCode;
use crate::span::Span;

mod error;
pub mod write;

pub use error::SerializeError;


/// HTTP Response.
///
/// Built by the caller, then flattened into bytes with [`Response::to_raw`] or
/// [`Response::write_into`]. The version is always [`SUPPORTED_VERSION`].
///
/// Header names and values added with [`Response::add_header`] are copied, the body is
/// borrowed for `'a`.
///
/// [`SUPPORTED_VERSION`]: crate::SUPPORTED_VERSION
pub struct Response<'h, 'a> {
    status: Option<StatusCode>,
    headers: Headers<'h, 'a>,
    body: Span<'a>,
}

impl<'h, 'a> Response<'h, 'a> {
    /// Create empty [`Response`] with unset status, header capacity is `slots.len()`.
    #[inline]
    pub fn new(slots: &'h mut [Header<'a>]) -> Self {
        Self {
            status: None,
            headers: Headers::new(slots),
            body: Span::EMPTY,
        }
    }

    #[inline]
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    /// Returns the status, or `None` if it was never set.
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Append a header, copying `name` and `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when header storage is full, nothing is copied then.
    pub fn add_header<N, V>(&mut self, name: N, value: V) -> Result<&Header<'a>, CapacityError>
    where
        N: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        if self.headers.is_full() {
            return Err(CapacityError { capacity: self.headers.capacity() });
        }
        self.headers.append(Header::copy_from_slice(name.as_ref(), value.as_ref()))
    }

    /// Append a header as is, without copying borrowed spans.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when header storage is full.
    #[inline]
    pub fn insert_header(&mut self, header: Header<'a>) -> Result<&Header<'a>, CapacityError> {
        self.headers.append(header)
    }

    #[inline]
    pub fn headers(&self) -> &Headers<'h, 'a> {
        &self.headers
    }

    /// Set the body to borrowed `body`, replacing the previous one.
    ///
    /// `Content-Length` is not derived from the body, add it explicitly when needed.
    #[inline]
    pub fn set_body(&mut self, body: &'a [u8]) {
        self.body = Span::Borrowed(body);
    }

    /// Set the body to shared `body`, replacing the previous one.
    #[inline]
    pub fn set_body_bytes(&mut self, body: Bytes) {
        self.body = Span::Owned(body);
    }

    #[inline]
    pub fn body(&self) -> &Span<'a> {
        &self.body
    }
}

/// Serialization
impl Response<'_, '_> {
    /// Returns the exact serialized length.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::StatusUnset`] if no status was set.
    #[inline]
    pub fn encoded_len(&self) -> Result<usize, SerializeError> {
        write::encoded_len(self)
    }

    /// Serialize into `buf`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Overflow`] if `buf` is too short, `buf` is untouched then.
    pub fn write_into(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        let mut dst = buf;
        write::write_response(self, &mut dst)
    }

    /// Serialize into a freshly allocated buffer of exactly [`Response::encoded_len`] bytes.
    ///
    /// No trailing `\0` is appended, the returned [`Bytes`] carries its own length. For an API that
    /// needs a NUL-terminated string, copy with [`CString::new`], which also rejects a body
    /// containing `\0`.
    ///
    /// [`CString::new`]: std::ffi::CString::new
    pub fn to_raw(&self) -> Result<Bytes, SerializeError> {
        write::to_raw(self)
    }
}

impl std::fmt::Debug for Response<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}
