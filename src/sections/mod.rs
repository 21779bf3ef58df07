//! Password validation sections
//!
//! Each section handles one stage of the windowed composition rule.

mod charset;
mod composition;
mod window;

pub use charset::{CharClass, ClassCounts};
pub use composition::composition_section;
pub use window::window_section;

use crate::error::ValidationError;

/// Result type for section functions.
/// - `Ok(value)` - Section passed, value feeds the next section
/// - `Err(reason)` - Password rejected, remaining sections are skipped
pub type SectionResult<T> = Result<T, ValidationError>;
