//! Borrowed or owned view over a contiguous byte range.
use bytes::Bytes;
use std::ffi::{CString, NulError};
use std::ops::Deref;
use std::str::Utf8Error;

/// A byte range that is either borrowed from a source buffer or independently owned.
///
/// Parsed requests only ever produce [`Span::Borrowed`]. The borrow ties the span to the buffer it
/// was parsed from, so it cannot outlive it. [`Span::Owned`] holds a reference counted copy
/// that is released when the last handle drops.
///
/// Spans carry their length explicitly and may contain any byte, including `\0`.
#[derive(Clone)]
pub enum Span<'a> {
    /// View into a caller owned buffer.
    Borrowed(&'a [u8]),
    /// Independently allocated copy.
    Owned(Bytes),
}

impl<'a> Span<'a> {
    /// Empty borrowed span.
    pub const EMPTY: Span<'a> = Span::Borrowed(b"");

    /// Create a borrowed span over `bytes`.
    #[inline]
    pub const fn borrowed(bytes: &'a [u8]) -> Self {
        Self::Borrowed(bytes)
    }

    /// Create an owned span by copying `bytes`.
    #[inline]
    pub fn copy_from_slice(bytes: &[u8]) -> Span<'static> {
        Span::Owned(Bytes::copy_from_slice(bytes))
    }

    /// Returns the viewed bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Borrowed(bytes) => bytes,
            Self::Owned(bytes) => bytes,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns `true` if the span owns its storage.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Exact byte comparison.
    ///
    /// Lengths are compared first, the bytes are only inspected when they agree.
    #[inline]
    pub fn eq_bytes(&self, other: &[u8]) -> bool {
        let this = self.as_slice();
        this.len() == other.len() && this == other
    }

    /// ASCII case-insensitive comparison, requiring equal length.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &[u8]) -> bool {
        let this = self.as_slice();
        this.len() == other.len() && this.eq_ignore_ascii_case(other)
    }

    /// Copy into an owned span that no longer borrows the source buffer.
    ///
    /// Cloning an owned span only bumps its reference count.
    pub fn to_owned_span(&self) -> Span<'static> {
        match self {
            Self::Borrowed(bytes) => Span::copy_from_slice(bytes),
            Self::Owned(bytes) => Span::Owned(bytes.clone()),
        }
    }

    /// Detach from the source buffer, reusing owned storage.
    pub fn into_owned(self) -> Span<'static> {
        match self {
            Self::Borrowed(bytes) => Span::copy_from_slice(bytes),
            Self::Owned(bytes) => Span::Owned(bytes),
        }
    }

    /// Copy into a NUL-terminated string for APIs that require one.
    ///
    /// # Errors
    ///
    /// Returns error if the span contains an interior `\0`.
    pub fn to_c_string(&self) -> Result<CString, NulError> {
        CString::new(self.as_slice())
    }

    /// Returns the span as string slice if it is valid UTF-8.
    #[inline]
    pub fn try_as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_slice())
    }
}

impl Default for Span<'_> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Deref for Span<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Span<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::Borrowed(value)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Borrowed(value.as_bytes())
    }
}

impl From<Bytes> for Span<'_> {
    #[inline]
    fn from(value: Bytes) -> Self {
        Self::Owned(value)
    }
}

// ===== Comparison =====

impl PartialEq for Span<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.eq_bytes(other.as_slice())
    }
}

impl Eq for Span<'_> {}

impl PartialEq<[u8]> for Span<'_> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.eq_bytes(other)
    }
}

impl PartialEq<&[u8]> for Span<'_> {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        self.eq_bytes(other)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Span<'_> {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.eq_bytes(&other[..])
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Span<'_> {
    #[inline]
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.eq_bytes(&other[..])
    }
}

impl PartialEq<str> for Span<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_bytes(other.as_bytes())
    }
}

impl PartialEq<&str> for Span<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_bytes(other.as_bytes())
    }
}

impl std::fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.as_slice().escape_ascii())
    }
}
