/// Response serialization error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    /// Response status was never set.
    #[error("response status is not set")]
    StatusUnset,
    /// Destination buffer is shorter than the serialized response.
    #[error("destination too small: {needed} bytes needed, {remaining} remaining")]
    Overflow { needed: usize, remaining: usize },
    /// Written length disagrees with the computed length.
    #[error("serialized {written} bytes, expected {expected}")]
    LengthMismatch { expected: usize, written: usize },
}
