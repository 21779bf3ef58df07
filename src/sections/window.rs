//! Window section - scans the examined window and tallies character classes.

use secrecy::{ExposeSecret, SecretString};

use super::{CharClass, ClassCounts, SectionResult};
use crate::error::ValidationError;
use crate::policy::ValidationPolicy;

/// Scans positions `window_start..window_end` of the password in order.
///
/// Stops at the first character outside the accepted classes, or at the
/// first window position past the end of the input. Characters outside the
/// window are never inspected.
///
/// # Returns
/// - `Ok(counts)` if every window position holds a digit or ASCII letter
/// - `Err(InvalidCharacter)` on the first disallowed character
/// - `Err(TooShort)` if the input ends inside the window
/// - `Err(InvalidWindow)` if the policy window does not fit in `usize`
pub fn window_section(password: &SecretString, policy: &ValidationPolicy) -> SectionResult<ClassCounts> {
    let end = policy.window_end().ok_or(ValidationError::InvalidWindow {
        start: policy.window_start,
        len: policy.window_len,
    })?;
    let pwd = password.expose_secret();
    let mut chars = pwd.chars().skip(policy.window_start);
    let mut counts = ClassCounts::default();

    for position in policy.window_start..end {
        let Some(c) = chars.next() else {
            return Err(ValidationError::TooShort {
                len: pwd.chars().count(),
                required: end,
            });
        };
        match CharClass::of(c) {
            Some(class) => counts.record(class),
            None => return Err(ValidationError::InvalidCharacter { position }),
        }
    }

    Ok(counts)
}
