use super::{CapacityError, Header};
use crate::span::Span;

/// Fixed-capacity, insertion ordered header collection.
///
/// The storage is owned by the caller and borrowed for `'h`. The collection never allocates and
/// never grows, appending to a full collection returns [`CapacityError`] and leaves existing
/// entries untouched.
///
/// Lookup is a linear scan. Header counts are small, so there is no index.
pub struct Headers<'h, 'a> {
    slots: &'h mut [Header<'a>],
    len: usize,
}

impl<'h, 'a> Headers<'h, 'a> {
    /// Create empty collection backed by `slots`.
    ///
    /// Existing content of `slots` is ignored, capacity is `slots.len()`.
    #[inline]
    pub fn new(slots: &'h mut [Header<'a>]) -> Self {
        Self { slots, len: 0 }
    }

    /// Returns the number of headers in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of headers the collection can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    /// Append header at the end.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the collection is full. The rejected header is dropped.
    pub fn append(&mut self, header: Header<'a>) -> Result<&Header<'a>, CapacityError> {
        if self.is_full() {
            return Err(CapacityError { capacity: self.capacity() });
        }
        let idx = self.len;
        self.len += 1;
        let slot = &mut self.slots[idx];
        *slot = header;
        Ok(slot)
    }

    /// Returns the first header named `name`, ignoring ASCII case.
    pub fn find<N: AsRef<[u8]>>(&self, name: N) -> Option<&Header<'a>> {
        let name = name.as_ref();
        self.as_slice().iter().find(|header| header.is(name))
    }

    /// Returns the value of the first header named `name`, ignoring ASCII case.
    #[inline]
    pub fn get<N: AsRef<[u8]>>(&self, name: N) -> Option<&Span<'a>> {
        self.find(name).map(|header| &header.value)
    }

    /// Returns `true` if a header named `name` is present.
    #[inline]
    pub fn contains<N: AsRef<[u8]>>(&self, name: N) -> bool {
        self.find(name).is_some()
    }

    /// Returns the headers in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Header<'a>] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Remove all headers.
    ///
    /// Used slots are reset, which releases any owned spans they held.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = Header::EMPTY;
        }
        self.len = 0;
    }
}

impl std::fmt::Debug for Headers<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|h| (&h.name, &h.value)))
            .finish()
    }
}

impl<'s, 'a> IntoIterator for &'s Headers<'_, 'a> {
    type Item = &'s Header<'a>;

    type IntoIter = Iter<'s, 'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ===== Iter =====

/// Iterator over [`Headers`] in insertion order.
#[derive(Debug)]
pub struct Iter<'s, 'a> {
    inner: std::slice::Iter<'s, Header<'a>>,
}

impl<'s, 'a> Iterator for Iter<'s, 'a> {
    type Item = &'s Header<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}
