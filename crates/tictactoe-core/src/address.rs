//! Address parsing and the short display forms used across the UI.

use alloy_primitives::{Address, TxHash};
use thiserror::Error;

/// Why a string failed to parse as an account or contract address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address must be 40 hex digits, got {0}")]
    Length(usize),
    #[error("address contains non-hex characters")]
    NotHex,
    #[error("mixed-case address has an invalid checksum")]
    Checksum,
}

/// Parse an address the way wallets accept them.
///
/// The lowercase `0x` prefix is optional; surrounding whitespace and an
/// uppercase `0X` are rejected. All-lowercase and all-uppercase digits are
/// taken as-is; mixed case must be a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    if input.is_empty() {
        return Err(AddressError::Empty);
    }
    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.len() != 40 {
        return Err(AddressError::Length(digits.len()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::NotHex);
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    let prefixed = format!("0x{digits}");
    if has_lower && has_upper {
        Address::parse_checksummed(&prefixed, None).map_err(|_| AddressError::Checksum)
    } else {
        prefixed.parse::<Address>().map_err(|_| AddressError::NotHex)
    }
}

/// `true` if `input` is something [`parse_address`] accepts.
pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}

/// Checksummed address shortened to `0xAbCd...1234`.
pub fn shorten_address(address: &Address) -> String {
    shorten(&address.to_checksum(None))
}

/// Transaction hash shortened to `0xabcd...1234`.
pub fn shorten_hash(hash: &TxHash) -> String {
    shorten(&hash.to_string())
}

fn shorten(full: &str) -> String {
    if full.len() <= 10 {
        return full.to_string();
    }
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn accepts_checksummed_and_single_case() {
        assert!(is_address(CHECKSUMMED));
        assert!(is_address(&CHECKSUMMED.to_lowercase()));
        assert!(is_address(&format!("0x{}", CHECKSUMMED[2..].to_uppercase())));
        // Prefix is optional.
        assert!(is_address(&CHECKSUMMED[2..].to_lowercase()));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_address(""), Err(AddressError::Empty));
        assert_eq!(parse_address("0x1234"), Err(AddressError::Length(4)));
        assert_eq!(
            parse_address("0xzzzeb6053f3e94c9b9a09f33669435e7ef1beaed"),
            Err(AddressError::NotHex)
        );
        // Flip the case of one letter to break the checksum.
        let broken = CHECKSUMMED.replacen("aAeb", "aaeb", 1);
        assert_eq!(parse_address(&broken), Err(AddressError::Checksum));
        assert!(!is_address("not-an-address"));
    }

    #[test]
    fn prefix_and_whitespace_are_strict() {
        let lower = CHECKSUMMED.to_lowercase();
        assert_eq!(
            parse_address(&format!("0X{}", &lower[2..])),
            Err(AddressError::Length(42))
        );
        assert!(!is_address(&format!(" {lower}")));
        assert!(!is_address(&format!("{lower}\n")));
        assert!(!is_address(" "));
    }

    #[test]
    fn equal_regardless_of_case() {
        let a = parse_address(CHECKSUMMED).unwrap();
        let b = parse_address(&CHECKSUMMED.to_lowercase()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_forms() {
        let a = parse_address(CHECKSUMMED).unwrap();
        assert_eq!(shorten_address(&a), "0x5aAe...eAed");

        let hash = TxHash::repeat_byte(0xab);
        assert_eq!(shorten_hash(&hash), "0xabab...abab");
    }
}
