use bigdecimal::num_bigint::BigInt;
pub use bigdecimal::num_bigint::BigUint;
use bigdecimal::BigDecimal;

use crate::values::hex_digits;
use crate::Error;

/// Number of decimals of CFX, 1 CFX = 10^18 drip
pub const CFX_DECIMALS: i64 = 18;

/// Amount expressed in drip, the smallest unit of CFX
pub type Drip = BigUint;

/// Parse a hex quantity of drip as returned by the node
pub fn parse_drip(quantity: &str) -> Result<Drip, Error> {
    let digits = hex_digits(quantity)?;

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| Error::MalformedResponse(format!("invalid drip amount {}", quantity)))
}

pub fn drip_to_cfx(amount: &Drip) -> BigDecimal {
    BigDecimal::new(BigInt::from(amount.clone()), CFX_DECIMALS)
}

/// Render a drip amount in CFX, without exponent nor trailing zeros
pub fn format_cfx(amount: &Drip) -> String {
    drip_to_cfx(amount).normalized().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drip() {
        assert_eq!(parse_drip("0x0").unwrap(), BigUint::from(0u8));
        assert_eq!(parse_drip("0x14d1120d7b160000").unwrap(), BigUint::from(1_500_000_000_000_000_000u64));
        assert_eq!(
            parse_drip("0x3635c9adc5dea00000").unwrap(),
            BigUint::from(1_000_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_parse_malformed_drip() {
        assert!(parse_drip("1000").is_err());
        assert!(parse_drip("0x").is_err());
        assert!(parse_drip("0xnotahex").is_err());
    }

    #[test]
    fn test_format_cfx() {
        assert_eq!(format_cfx(&BigUint::from(0u8)), "0");
        assert_eq!(format_cfx(&BigUint::from(1u8)), "0.000000000000000001");
        assert_eq!(format_cfx(&BigUint::from(1_500_000_000_000_000_000u64)), "1.5");
        assert_eq!(format_cfx(&BigUint::from(10_000_000_000_000_000_000u64)), "10");
        assert_eq!(format_cfx(&BigUint::from(1_000_000_000_000_000_000_000u128)), "1000");
    }
}
