//! Decimal parsing and packing of 128-bit limbs into 32-byte words.

use alloy::primitives::B256;
use num_bigint::BigUint;
use num_traits::{Num, ToPrimitive};

use crate::error::ValueError;

/// Width in bits of a single limb.
pub const LIMB_BITS: u32 = 128;
/// Width in bits of a packed word.
pub const WORD_BITS: u32 = 256;

/// Parses a non-negative decimal integer of arbitrary size.
///
/// Only ASCII digits are accepted. Signs, separators, whitespace and radix
/// prefixes are rejected rather than interpreted.
pub fn parse_decimal(value: &str) -> Result<BigUint, ValueError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValueError::Parse(value.to_owned()));
    }
    BigUint::from_str_radix(value, 10).map_err(|_| ValueError::Parse(value.to_owned()))
}

/// Half of a 256-bit word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limb(pub u128);

impl Limb {
    /// Parses a decimal limb, rejecting anything wider than 128 bits.
    pub fn from_decimal(value: &str) -> Result<Self, ValueError> {
        let parsed = parse_decimal(value)?;
        parsed
            .to_u128()
            .map(Limb)
            .ok_or(ValueError::Overflow {
                bits: parsed.bits(),
                width: LIMB_BITS,
            })
    }
}

/// Packs two limbs into one big-endian word: `(high << 128) | low`.
pub fn merge_limbs(low: Limb, high: Limb) -> B256 {
    let mut word = [0u8; 32];
    word[..16].copy_from_slice(&high.0.to_be_bytes());
    word[16..].copy_from_slice(&low.0.to_be_bytes());
    B256::from(word)
}

/// Merges two uint128 decimal strings (low, high) into one uint256 word.
pub fn merge128(low: &str, high: &str) -> Result<B256, ValueError> {
    Ok(merge_limbs(Limb::from_decimal(low)?, Limb::from_decimal(high)?))
}

/// Renders a decimal value as a left zero-padded 32-byte big-endian word.
///
/// Values wider than 256 bits are an error, never truncated.
pub fn to_bytes32(value: &str) -> Result<B256, ValueError> {
    let parsed = parse_decimal(value)?;
    if parsed.bits() > u64::from(WORD_BITS) {
        return Err(ValueError::Overflow {
            bits: parsed.bits(),
            width: WORD_BITS,
        });
    }

    let bytes = parsed.to_bytes_be();
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(B256::from(word))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    const TWO_POW_128: &str = "340282366920938463463374607431768211456";
    const U128_MAX: &str = "340282366920938463463374607431768211455";
    const U256_MAX: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    const TWO_POW_256: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639936";

    #[test]
    fn merge_zero_limbs() {
        assert_eq!(merge128("0", "0").unwrap(), B256::ZERO);
    }

    #[test]
    fn merge_low_one() {
        let word = merge128("1", "0").unwrap();
        assert_eq!(word[31], 1);
        assert!(word[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn merge_high_one() {
        let word = merge128("0", "1").unwrap();
        for (i, byte) in word.iter().enumerate() {
            assert_eq!(*byte, if i == 15 { 1 } else { 0 }, "byte {i}");
        }
    }

    #[test]
    fn merge_matches_shift_or() {
        let low = "123456789012345678901234567890";
        let high = "98765432109876543210";
        let expected = (parse_decimal(high).unwrap() << 128u32) | parse_decimal(low).unwrap();

        let word = merge128(low, high).unwrap();
        assert_eq!(BigUint::from_bytes_be(word.as_slice()), expected);
    }

    #[test]
    fn merge_accepts_full_width_limbs() {
        let word = merge128(U128_MAX, U128_MAX).unwrap();
        assert_eq!(word, B256::repeat_byte(0xff));
    }

    #[test]
    fn merge_rejects_oversized_low_limb() {
        assert_eq!(
            merge128(TWO_POW_128, "0"),
            Err(ValueError::Overflow {
                bits: 129,
                width: 128
            })
        );
    }

    #[test]
    fn merge_rejects_oversized_high_limb() {
        assert!(matches!(
            merge128("0", TWO_POW_128),
            Err(ValueError::Overflow { width: 128, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_decimal() {
        for input in ["abc", "", "-1", "+1", " 1", "1_000", "0x10", "1e3", "1.0"] {
            assert_eq!(
                parse_decimal(input),
                Err(ValueError::Parse(input.to_owned())),
                "{input:?}"
            );
        }
        assert!(matches!(merge128("abc", "0"), Err(ValueError::Parse(_))));
    }

    #[test]
    fn parse_allows_leading_zeros() {
        assert_eq!(parse_decimal("000042").unwrap(), BigUint::from(42u32));
    }

    #[test]
    fn bytes32_pads_on_the_left() {
        let word = to_bytes32("258").unwrap();
        assert_eq!(&word[30..], &[0x01, 0x02]);
        assert!(word[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn bytes32_reproduces_value() {
        for input in ["0", "1", "255", "256", U128_MAX, TWO_POW_128, U256_MAX] {
            let word = to_bytes32(input).unwrap();
            assert_eq!(
                U256::from_be_bytes(word.0),
                U256::from_str_radix(input, 10).unwrap(),
                "{input}"
            );
        }
    }

    #[test]
    fn bytes32_rejects_values_wider_than_256_bits() {
        assert_eq!(
            to_bytes32(TWO_POW_256),
            Err(ValueError::Overflow {
                bits: 257,
                width: 256
            })
        );
    }
}
