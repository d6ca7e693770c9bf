/// Parser budgets.
///
/// Bounds the work done on a single line, so pathological input fails early instead of being
/// scanned to the end.
///
/// ```
/// use httpspan::Limits;
///
/// let limits = Limits::DEFAULT.with_max_line_len(1024);
/// assert_eq!(limits.max_line_len(), 1024);
/// assert_eq!(limits.max_method_len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_method_len: usize,
    max_line_len: usize,
}

impl Limits {
    /// Default maximum method length, enough for every standard method with margin.
    pub const MAX_METHOD_LEN: usize = 10;

    /// Default maximum length of a single line, excluding its terminator.
    pub const MAX_LINE_LEN: usize = 8 * 1024;

    pub const DEFAULT: Self = Self {
        max_method_len: Self::MAX_METHOD_LEN,
        max_line_len: Self::MAX_LINE_LEN,
    };

    /// Set the maximum method token length.
    #[inline]
    pub const fn with_max_method_len(mut self, len: usize) -> Self {
        self.max_method_len = len;
        self
    }

    /// Set the maximum line length, excluding its terminator.
    #[inline]
    pub const fn with_max_line_len(mut self, len: usize) -> Self {
        self.max_line_len = len;
        self
    }

    #[inline]
    pub const fn max_method_len(&self) -> usize {
        self.max_method_len
    }

    #[inline]
    pub const fn max_line_len(&self) -> usize {
        self.max_line_len
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
