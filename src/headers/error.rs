//! Error types that can occur during header related operation.

/// An error returned when appending to a full [`Headers`].
///
/// [`Headers`]: crate::headers::Headers
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("header capacity exceeded ({capacity} slots)")]
pub struct CapacityError {
    pub(crate) capacity: usize,
}

impl CapacityError {
    /// Returns the capacity of the collection that rejected the header.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
