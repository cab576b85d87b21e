//! Field coercion for raw amount values
//!
//! Converts the raw `amount_cents` text into an [`Amount`]. Coercion is total:
//! every input produces an amount, and malformed text is flagged rather than
//! rejected.

use crate::types::Amount;

/// Result of coercing a raw amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercedAmount {
    /// The amount to fold into the running totals
    pub value: Amount,

    /// Whether the raw text was present but not an integer
    pub was_invalid: bool,
}

impl CoercedAmount {
    fn valid(value: Amount) -> Self {
        Self {
            value,
            was_invalid: false,
        }
    }

    fn invalid() -> Self {
        Self {
            value: 0,
            was_invalid: true,
        }
    }
}

/// Coerce a raw amount into minor currency units
///
/// - Surrounding whitespace is trimmed.
/// - Absent or empty input is a valid zero (not counted as invalid).
/// - Integer text (optionally signed) parses to its value; negatives are kept.
/// - Anything else, including fractional or out-of-range text, is zero with
///   `was_invalid` set.
pub fn coerce_amount(raw: Option<&str>) -> CoercedAmount {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return CoercedAmount::valid(0);
    }

    match trimmed.parse::<Amount>() {
        Ok(value) => CoercedAmount::valid(value),
        Err(_) => CoercedAmount::invalid(),
    }
}
