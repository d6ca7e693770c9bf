use crate::span::Span;

/// A single header field, a name and value pair.
///
/// Neither half is trimmed or case normalized, names are compared case-insensitively at lookup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: Span<'a>,
    pub value: Span<'a>,
}

impl<'a> Header<'a> {
    /// Placeholder used to fill unused storage slots.
    pub const EMPTY: Header<'a> = Header {
        name: Span::EMPTY,
        value: Span::EMPTY,
    };

    /// Create header from name and value.
    #[inline]
    pub fn new(name: impl Into<Span<'a>>, value: impl Into<Span<'a>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create header by copying name and value into owned storage.
    #[inline]
    pub fn copy_from_slice(name: &[u8], value: &[u8]) -> Header<'static> {
        Header {
            name: Span::copy_from_slice(name),
            value: Span::copy_from_slice(value),
        }
    }

    /// Returns `N` empty slots to back a [`Headers`] collection.
    ///
    /// [`Headers`]: crate::headers::Headers
    #[inline]
    pub fn slots<const N: usize>() -> [Header<'a>; N] {
        std::array::from_fn(|_| Self::EMPTY)
    }

    /// Returns `true` if the header name matches `name`, ignoring ASCII case.
    #[inline]
    pub fn is(&self, name: &[u8]) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl std::fmt::Debug for Header<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Header")
            .field(&self.name)
            .field(&self.value)
            .finish()
    }
}
