//! Password validator - runs the validation sections in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::ValidationError;
use crate::policy::ValidationPolicy;
use crate::sections::{composition_section, window_section, ClassCounts};

/// Delay before the channel variant starts, so bursts of keystrokes coalesce.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Validates passwords against a [`ValidationPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordValidator {
    policy: ValidationPolicy,
}

impl PasswordValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Checks a password and reports why it was rejected.
    ///
    /// # Arguments
    /// * `password` - The password to check
    /// * `token` - Optional cancellation token (async feature only)
    ///
    /// # Returns
    /// The window tally if the password is valid, otherwise the first
    /// rejection reason.
    pub fn check(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Result<ClassCounts, ValidationError> {
        #[cfg(feature = "async")]
        ensure_not_cancelled(token.as_ref())?;

        let counts = window_section(password, &self.policy).inspect_err(log_rejection)?;

        #[cfg(feature = "async")]
        ensure_not_cancelled(token.as_ref())?;

        composition_section(&counts, &self.policy).inspect_err(log_rejection)?;

        Ok(counts)
    }

    /// Returns `true` only if [`check`](Self::check) accepts the password.
    ///
    /// Short input, disallowed characters, unmet minimums and cancellation
    /// all yield `false`.
    pub fn validate(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> bool {
        self.check(
            password,
            #[cfg(feature = "async")]
            token,
        )
        .is_ok()
    }
}

#[cfg(feature = "async")]
fn ensure_not_cancelled(token: Option<&CancellationToken>) -> Result<(), ValidationError> {
    match token {
        Some(t) if t.is_cancelled() => Err(ValidationError::Cancelled),
        _ => Ok(()),
    }
}

#[allow(unused_variables)]
fn log_rejection(err: &ValidationError) {
    #[cfg(feature = "tracing")]
    tracing::debug!("Password rejected: {}", err);
}

/// Checks a password with the default policy.
pub fn check_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<ClassCounts, ValidationError> {
    PasswordValidator::default().check(
        password,
        #[cfg(feature = "async")]
        token,
    )
}

/// Validates a password with the default policy.
///
/// Examines positions 1 through 9 and requires at least 2 lowercase,
/// 2 uppercase and 3 digits there, with no other characters.
pub fn validate_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> bool {
    PasswordValidator::default().validate(
        password,
        #[cfg(feature = "async")]
        token,
    )
}

/// Async version that sends the check result via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<ClassCounts, ValidationError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password validation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let outcome = check_password(password, Some(token));

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn validate(pwd: &str) -> bool {
        #[cfg(feature = "async")]
        return validate_password(&secret(pwd), None);

        #[cfg(not(feature = "async"))]
        return validate_password(&secret(pwd));
    }

    fn check(pwd: &str) -> Result<ClassCounts, ValidationError> {
        #[cfg(feature = "async")]
        return check_password(&secret(pwd), None);

        #[cfg(not(feature = "async"))]
        return check_password(&secret(pwd));
    }

    #[test]
    fn test_validate_balanced_window() {
        // Window "A1aA1aA1a": 3 of each class.
        assert!(validate("aA1aA1aA1aA"));
        assert_eq!(
            check("aA1aA1aA1aA"),
            Ok(ClassCounts { lowercase: 3, uppercase: 3, digits: 3 })
        );
    }

    #[test]
    fn test_validate_too_few_digits() {
        // Window "A1aAbaA1a": 4 lowercase, 3 uppercase, 2 digits.
        assert!(!validate("aA1aAbaA1aA"));
        assert_eq!(
            check("aA1aAbaA1aA"),
            Err(ValidationError::Insufficient {
                counts: ClassCounts { lowercase: 4, uppercase: 3, digits: 2 }
            })
        );
    }

    #[test]
    fn test_validate_exact_length_minimums() {
        assert!(validate("xAA11aa222"));
    }

    #[test]
    fn test_validate_punctuation_in_window() {
        assert!(!validate("x!23456789"));
        assert_eq!(
            check("x!23456789"),
            Err(ValidationError::InvalidCharacter { position: 1 })
        );
    }

    #[test]
    fn test_validate_invalid_character_overrides_counts() {
        // Enough of every class, but a space inside the window.
        assert!(!validate("x AAbb11122"));
        assert!(!validate("xAAbb1112 3"));
        // Same characters with the space moved past the window.
        assert!(validate("xAAbb11122 "));
    }

    #[test]
    fn test_validate_short_input_is_false() {
        assert!(!validate("aB3cD"));
        assert_eq!(
            check("aB3cD"),
            Err(ValidationError::TooShort { len: 5, required: 10 })
        );
        assert!(!validate(""));
        assert!(!validate("xAA11aa22"));
    }

    #[test]
    fn test_validate_first_character_ignored() {
        for first in ['x', 'Z', '5', '!', ' ', 'é'] {
            let pwd = format!("{first}AA11aa222");
            assert!(validate(&pwd), "first character {first:?} changed the result");
        }
        // A valid first character cannot rescue a failing window.
        assert!(!validate("1AAbbbbbbb"));
    }

    #[test]
    fn test_validate_tail_ignored() {
        assert!(validate("xAA11aa222!@# \u{1F600}"));
        assert!(!validate("xAAbbbbbbb1111111111"));
    }

    #[test]
    fn test_validate_literal_from_entry_point() {
        // "a password" has a space at position 1.
        assert!(!validate("a password"));
        assert_eq!(
            check("a password"),
            Err(ValidationError::InvalidCharacter { position: 1 })
        );
    }

    #[test]
    fn test_validator_custom_policy() {
        let validator = PasswordValidator::new(ValidationPolicy {
            window_start: 0,
            window_len: 4,
            min_lowercase: 1,
            min_uppercase: 1,
            min_digits: 1,
        });
        assert_eq!(validator.policy().window_end(), Some(4));

        let pwd = secret("aB1c!!!");
        #[cfg(feature = "async")]
        assert!(validator.validate(&pwd, None));
        #[cfg(not(feature = "async"))]
        assert!(validator.validate(&pwd));
    }

    #[test]
    fn test_check_rejects_overflowing_window() {
        let validator = PasswordValidator::new(ValidationPolicy {
            window_start: usize::MAX,
            window_len: 1,
            ..ValidationPolicy::default()
        });
        let pwd = secret("xAA11aa222");

        #[cfg(feature = "async")]
        let outcome = validator.check(&pwd, None);
        #[cfg(not(feature = "async"))]
        let outcome = validator.check(&pwd);

        assert_eq!(
            outcome,
            Err(ValidationError::InvalidWindow { start: usize::MAX, len: 1 })
        );
    }
}
