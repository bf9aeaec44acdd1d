use std::fmt;
use std::str::FromStr;

use crate::constants::{MINOR_UNITS_PER_TOKEN, TOKEN_DECIMALS};
use crate::errors::ReputationError;

/// A token quantity in minor units (10^-6 of a whole token).
///
/// Decimal strings are converted exactly: no float is involved, and input
/// with more precision than the token supports is rejected rather than
/// rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount(u64);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub const fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whole-token value for display. Lossy above 2^53 minor units.
    pub fn to_major(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_TOKEN as f64
    }
}

impl From<u64> for TokenAmount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<TokenAmount> for u64 {
    fn from(amount: TokenAmount) -> Self {
        amount.0
    }
}

impl FromStr for TokenAmount {
    type Err = ReputationError;

    /// Parse a non-negative decimal such as `"0.01"`, `"15"` or `".5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ReputationError::InvalidAmount(format!("{s:?}: {reason}"));

        let trimmed = s.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected an unsigned decimal number"));
        }

        let decimals = TOKEN_DECIMALS as usize;
        let (significant, excess) = fraction.split_at(fraction.len().min(decimals));
        if excess.bytes().any(|b| b != b'0') {
            return Err(invalid("more than 6 decimal places"));
        }

        let whole_units = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| invalid("out of range"))?
        };
        let fraction_units = significant
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(decimals)
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));

        whole_units
            .checked_mul(MINOR_UNITS_PER_TOKEN)
            .and_then(|units| units.checked_add(fraction_units))
            .map(TokenAmount)
            .ok_or_else(|| invalid("out of range"))
    }
}

impl fmt::Display for TokenAmount {
    /// Exact decimal with all six places, e.g. `15.000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / MINOR_UNITS_PER_TOKEN,
            self.0 % MINOR_UNITS_PER_TOKEN,
            width = TOKEN_DECIMALS as usize
        )
    }
}
