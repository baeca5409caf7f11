//! Amount entry validation and lamport conversion
//!
//! Keystroke-level grammar checks for the amount field, plus exact
//! conversion between decimal SOL strings and integer lamport counts.
//! Conversion is integer-only: a fractional SOL amount never round-trips
//! through floating point on its way to the instruction.

use crate::{Error, Result};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Fractional decimal digits in one SOL.
pub const SOL_DECIMALS: u32 = 9;

/// Whether `text` is acceptable in the amount field as typed.
///
/// Accepts the empty string, pure digit runs, and digit runs with a
/// single decimal point anywhere (`"1."`, `".5"`, `"."` are all fine
/// mid-edit). Anything else - signs, letters, whitespace, a second
/// point - is rejected so the caller can ignore the keystroke.
pub fn is_acceptable_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && text.bytes().filter(|&b| b == b'.').count() <= 1
}

/// Whether `text` is a complete decimal number: digits, optionally
/// followed by a point and at least one more digit.
pub fn is_digit(text: &str) -> bool {
    match text.split_once('.') {
        None => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Whether `text` is a complete decimal number with at most
/// `max_decimals` fractional digits. For assets with fixed on-chain
/// precision this is the final gate before conversion.
pub fn fits_max_decimals(text: &str, max_decimals: usize) -> bool {
    match text.split_once('.') {
        None => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
        Some((whole, frac)) => {
            !whole.is_empty()
                && frac.len() <= max_decimals
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Convert a decimal SOL string to lamports, exactly.
///
/// `"1.5"` becomes `1_500_000_000`. Fails on anything outside the entry
/// grammar, on more than nine fractional digits, and on amounts that do
/// not fit in a `u64` lamport count.
pub fn parse_lamports(text: &str) -> Result<u64> {
    if text.is_empty() || !is_acceptable_digits(text) {
        return Err(Error::InvalidAmount(format!("not a decimal number: {text:?}")));
    }
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(Error::InvalidAmount(format!("not a decimal number: {text:?}")));
    }
    if frac.len() > SOL_DECIMALS as usize {
        return Err(Error::InvalidAmount(format!(
            "more than {SOL_DECIMALS} decimal places: {text}"
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| Error::InvalidAmount(format!("amount out of range: {text}")))?
    };
    let frac_lamports: u64 = if frac.is_empty() {
        0
    } else {
        let scale = 10u64.pow(SOL_DECIMALS - frac.len() as u32);
        let digits: u64 = frac
            .parse()
            .map_err(|_| Error::InvalidAmount(format!("amount out of range: {text}")))?;
        digits * scale
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|lamports| lamports.checked_add(frac_lamports))
        .ok_or_else(|| Error::InvalidAmount(format!("amount out of range: {text}")))
}

/// Format a lamport count as a SOL string with trailing zeros trimmed.
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let remainder = lamports % LAMPORTS_PER_SOL;

    if remainder == 0 {
        whole.to_string()
    } else {
        let frac = format!("{remainder:09}");
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_grammar_accepts_partial_forms() {
        for text in ["", "0", "123", "1.", ".5", ".", "1.5", "007", "0.000000001"] {
            assert!(is_acceptable_digits(text), "should accept {text:?}");
        }
    }

    #[test]
    fn entry_grammar_rejects_garbage() {
        for text in ["-1", "+1", "1.2.3", "1a", "a", " 1", "1 ", "1,5", "0x10", "1e9"] {
            assert!(!is_acceptable_digits(text), "should reject {text:?}");
        }
    }

    #[test]
    fn complete_number_check_is_stricter() {
        assert!(is_digit("1"));
        assert!(is_digit("1.5"));
        assert!(!is_digit(""));
        assert!(!is_digit("1."));
        assert!(!is_digit(".5"));
        assert!(!is_digit("."));
    }

    #[test]
    fn max_decimals_gate() {
        assert!(fits_max_decimals("1.123456789", 9));
        assert!(!fits_max_decimals("1.1234567891", 9));
        assert!(fits_max_decimals("1", 9));
        assert!(fits_max_decimals("1.", 9));
        assert!(!fits_max_decimals(".5", 9));
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(parse_lamports("1.5").unwrap(), 1_500_000_000);
        assert_eq!(parse_lamports("0").unwrap(), 0);
        assert_eq!(parse_lamports("0.000000001").unwrap(), 1);
        assert_eq!(parse_lamports(".5").unwrap(), 500_000_000);
        assert_eq!(parse_lamports("2.").unwrap(), 2_000_000_000);
        // 0.1 is not representable in binary floating point; the integer
        // path must still land on the exact lamport count.
        assert_eq!(parse_lamports("0.1").unwrap(), 100_000_000);
        assert_eq!(parse_lamports("123.456789123").unwrap(), 123_456_789_123);
    }

    #[test]
    fn parse_rejects_invalid_forms() {
        for text in ["", ".", "1.2.3", "-1", "abc", "1.1234567891"] {
            assert!(
                matches!(parse_lamports(text), Err(Error::InvalidAmount(_))),
                "should reject {text:?}"
            );
        }
        // u64::MAX lamports is ~18.4 billion SOL; anything above overflows.
        assert!(matches!(
            parse_lamports("99999999999"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_sol(0), "0");
        assert_eq!(format_sol(1_500_000_000), "1.5");
        assert_eq!(format_sol(1_000_000_000), "1");
        assert_eq!(format_sol(1), "0.000000001");
        assert_eq!(format_sol(123_456_789_123), "123.456789123");
    }
}
