//! Windowed password composition validation
//!
//! This library checks a fixed window of a password (positions 1 through 9,
//! the first character is skipped) for a minimum number of lowercase
//! letters, uppercase letters and digits.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation support and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_window::{check_password, validate_password, ValidationError};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("xAA11aa222".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let valid = validate_password(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let valid = validate_password(&password);
//!
//! assert!(valid);
//!
//! let short = SecretString::new("aB3cD".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let outcome = check_password(&short, None);
//!
//! #[cfg(not(feature = "async"))]
//! let outcome = check_password(&short);
//!
//! assert_eq!(outcome, Err(ValidationError::TooShort { len: 5, required: 10 }));
//! ```

// Internal modules
mod error;
mod policy;
mod sections;
mod validator;

// Public API
pub use error::ValidationError;
pub use policy::ValidationPolicy;
pub use sections::{CharClass, ClassCounts};
pub use validator::{check_password, validate_password, PasswordValidator};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
