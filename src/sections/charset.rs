//! Character classes and per-class counters.

use std::fmt;

/// ASCII character classes accepted inside the examined window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Uppercase,
    Lowercase,
}

impl CharClass {
    /// Classifies `c`, or returns `None` for anything outside `0-9`, `A-Z`, `a-z`.
    pub fn of(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit),
            'A'..='Z' => Some(Self::Uppercase),
            'a'..='z' => Some(Self::Lowercase),
            _ => None,
        }
    }
}

/// Running tally of each class over the examined window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
}

impl ClassCounts {
    pub fn record(&mut self, class: CharClass) {
        match class {
            CharClass::Digit => self.digits += 1,
            CharClass::Uppercase => self.uppercase += 1,
            CharClass::Lowercase => self.lowercase += 1,
        }
    }
}

impl fmt::Display for ClassCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lowercase, {} uppercase, {} digits",
            self.lowercase, self.uppercase, self.digits
        )
    }
}
