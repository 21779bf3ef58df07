//! Composition section - checks per-class minimums over the window tally.

use super::{ClassCounts, SectionResult};
use crate::error::ValidationError;
use crate::policy::ValidationPolicy;

/// Checks the window tally against the policy minimums.
///
/// # Returns
/// - `Ok(())` if every class reaches its minimum
/// - `Err(Insufficient)` otherwise
pub fn composition_section(counts: &ClassCounts, policy: &ValidationPolicy) -> SectionResult<()> {
    if counts.lowercase >= policy.min_lowercase
        && counts.uppercase >= policy.min_uppercase
        && counts.digits >= policy.min_digits
    {
        return Ok(());
    }
    Err(ValidationError::Insufficient { counts: *counts })
}
