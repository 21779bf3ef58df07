//! Validation policy - window bounds and per-class minimums.

/// First examined position (index 0 is skipped).
pub const WINDOW_START: usize = 1;
/// Number of characters examined.
pub const WINDOW_LEN: usize = 9;

pub const MIN_LOWERCASE: usize = 2;
pub const MIN_UPPERCASE: usize = 2;
pub const MIN_DIGITS: usize = 3;

/// Parameters of the windowed composition rule.
///
/// `Default` yields positions 1 through 9 with at least 2 lowercase,
/// 2 uppercase and 3 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub window_start: usize,
    pub window_len: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_digits: usize,
}

impl ValidationPolicy {
    /// Exclusive end of the examined window, i.e. the minimum input length.
    ///
    /// Returns `None` if the window extends past `usize::MAX`.
    pub fn window_end(&self) -> Option<usize> {
        self.window_start.checked_add(self.window_len)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            window_start: WINDOW_START,
            window_len: WINDOW_LEN,
            min_lowercase: MIN_LOWERCASE,
            min_uppercase: MIN_UPPERCASE,
            min_digits: MIN_DIGITS,
        }
    }
}
