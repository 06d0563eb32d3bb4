//! # Balance Formatting
//!
//! Converts raw integer balances (a token's smallest unit) into bounded-
//! precision display strings.
//!
//! ## Functions
//!
//! - [`format_units`] - Full-precision division by `10^decimals`
//! - [`format_balance`] - Display formatting with 4-digit fraction truncation
//!
//! Raw ERC-20 balances are 256-bit, so values ride in
//! [`alloy_primitives::U256`] rather than any machine integer.

use alloy_primitives::U256;
use tracing::debug;

/// Number of fractional digits retained for display.
const DISPLAY_FRACTION_DIGITS: usize = 4;

/// Divide a raw integer balance by `10^decimals` at full precision.
///
/// Trailing fractional zeros are trimmed, but at least one fractional digit
/// is kept, so whole values come out as `"1.0"` (display trimming is
/// [`format_balance`]'s job).
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use indexer::utils::format::format_units;
///
/// assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
/// assert_eq!(format_units(U256::from(1_000_000u64), 6), "1.0");
/// assert_eq!(format_units(U256::from(42u64), 0), "42");
/// ```
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let decimals = decimals as usize;
    let (int_part, frac_part) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        // Value smaller than one display unit: left-pad the fraction
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let frac_trimmed = frac_part.trim_end_matches('0');
    if frac_trimmed.is_empty() {
        format!("{}.0", int_part)
    } else {
        format!("{}.{}", int_part, frac_trimmed)
    }
}

/// Format a raw hex balance for display.
///
/// The fractional part keeps at most four digits; anything longer is cut to
/// four with an `"..."` marker. A fraction that reduces to the single digit
/// `0` is dropped entirely so whole balances show no `.0` noise.
///
/// Missing `decimals` is treated as 0 and the raw units are shown undivided.
/// This is a known approximation for tokens whose metadata is incomplete,
/// not an error. Unparseable input degrades to `"0"` rather than failing
/// the row. Negative and zero balances follow the same rule.
///
/// # Examples
///
/// ```rust
/// use indexer::utils::format::format_balance;
///
/// assert_eq!(format_balance("0x0", Some(18)), "0");
/// assert_eq!(format_balance("0x112210f47de98115", Some(18)), "1.2345...");
/// assert_eq!(format_balance("0x05f5e100", Some(6)), "100");
/// ```
pub fn format_balance(raw: &str, decimals: Option<u8>) -> String {
    let decimals = match decimals {
        Some(decimals) => decimals,
        None => {
            debug!(raw, "token metadata missing decimals; formatting raw units");
            0
        }
    };

    let Some((negative, value)) = parse_raw(raw) else {
        debug!(raw, "unparseable raw balance; formatting as zero");
        return "0".to_string();
    };

    let display = trim_display(&format_units(value, decimals));
    if negative && display != "0" {
        format!("-{}", display)
    } else {
        display
    }
}

/// Parse a hex balance string, tolerating a `0x` prefix and a leading sign.
fn parse_raw(raw: &str) -> Option<(bool, U256)> {
    let trimmed = raw.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let body = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .unwrap_or(body);

    if body.is_empty() {
        return None;
    }
    U256::from_str_radix(body, 16).ok().map(|value| (negative, value))
}

/// Apply the display truncation rule to a full-precision decimal string.
fn trim_display(formatted: &str) -> String {
    match formatted.split_once('.') {
        None => formatted.to_string(),
        Some((int_part, frac_part)) => {
            let frac = if frac_part.len() > DISPLAY_FRACTION_DIGITS {
                format!("{}...", &frac_part[..DISPLAY_FRACTION_DIGITS])
            } else {
                frac_part.to_string()
            };
            // "1.0" is noise; "1.5" is signal
            if frac == "0" {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
    }
}
