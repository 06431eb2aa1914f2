//! Token amount formatting.

use alloy_primitives::U256;

/// Format a raw token amount with `decimals` fractional digits.
///
/// Trailing zeros of the fraction are dropped but at least one digit is
/// kept, so whole amounts read `1.0` rather than `1`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return format!("{digits}.0");
    }

    let (whole, fraction) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };
    format!("{whole}.{}", trim_fraction(&fraction))
}

fn trim_fraction(fraction: &str) -> &str {
    let trimmed = fraction.trim_end_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_fractional_amounts() {
        assert_eq!(format_units(U256::from(1_000_000u64), 6), "1.0");
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_units(U256::from(123u64), 2), "1.23");
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
    }

    #[test]
    fn tiny_amount_keeps_leading_zeros() {
        assert_eq!(format_units(U256::from(1u8), 18), "0.000000000000000001");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(format_units(U256::from(42u8), 0), "42.0");
    }

    #[test]
    fn one_ether() {
        let wei = U256::from(10u8).pow(U256::from(18u8));
        assert_eq!(format_units(wei, 18), "1.0");
    }
}
