//! Italian-locale EUR formatting.

use crate::Amount;
use crate::tco::CalcError;

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
/// Non-breaking space before the symbol, as `it-IT` does.
const SYMBOL: &str = "\u{a0}€";
/// Shown instead of a cost per km when there is no distance.
pub const UNAVAILABLE: &str = "n/d";

/// Format `amount` as `1.234,56 €`.
pub fn format_eur(amount: Amount) -> String {
    let fixed = amount.to_fixed(2);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));
    format!(
        "{sign}{}{DECIMAL_SEPARATOR}{cents}{SYMBOL}",
        group_thousands(whole)
    )
}

/// Cost per km with three decimals, or [`UNAVAILABLE`].
pub fn format_per_km(value: Result<Amount, CalcError>) -> String {
    match value {
        Ok(amount) => amount.to_fixed(3),
        Err(CalcError::ZeroDistance) => UNAVAILABLE.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
