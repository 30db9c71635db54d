use std::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};
use thiserror::Error;

/// Number of implicit fractional digits every amount is displayed with.
pub const DISPLAY_DECIMALS: usize = 18;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount must not be empty")]
    Empty,
    #[error("Amount `{raw}` contains a non-digit character")]
    InvalidDigit { raw: String },
    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
}

/// Parses a raw token amount made of ASCII digits only.
///
/// Signs and `_` separators are rejected even though [`BigUint`] would
/// accept them.
pub fn parse_amount(raw: &str) -> Result<BigUint, AmountError> {
    if raw.is_empty() {
        return Err(AmountError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidDigit {
            raw: raw.to_string(),
        });
    }
    Ok(BigUint::from_str(raw)?)
}

/// Renders a raw integer amount as `<integer>,<18 fractional digits>`.
///
/// The input must consist of ASCII digits only. Leading zeros are kept
/// as they are, and an empty string is treated as zero.
pub fn format_amount(raw: &str) -> String {
    debug_assert!(raw.bytes().all(|b| b.is_ascii_digit()));
    if raw.len() <= DISPLAY_DECIMALS {
        format!("0,{raw:0>width$}", width = DISPLAY_DECIMALS)
    } else {
        let (whole, fraction) = raw.split_at(raw.len() - DISPLAY_DECIMALS);
        format!("{whole},{fraction}")
    }
}
