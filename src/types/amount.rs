//! Conversions between rupees and paisa
//!
//! Khalti amounts are integers in paisa (1/100 NPR).

use crate::{KhaltiError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Paisa per rupee
pub const PAISA_PER_RUPEE: u64 = 100;

/// Convert an amount in NPR to paisa
///
/// Fails for negative amounts and for amounts finer than one paisa.
pub fn npr_to_paisa(npr: Decimal) -> Result<u64> {
    if npr.is_sign_negative() && !npr.is_zero() {
        return Err(KhaltiError::validation("amount", "Amount cannot be negative"));
    }

    let paisa = npr
        .checked_mul(Decimal::from(PAISA_PER_RUPEE))
        .ok_or_else(|| KhaltiError::validation("amount", "Amount is out of range"))?;
    if paisa.fract() != Decimal::ZERO {
        return Err(KhaltiError::validation(
            "amount",
            format!("Amount {} has more than two decimal places", npr),
        ));
    }

    paisa
        .to_u64()
        .ok_or_else(|| KhaltiError::validation("amount", "Amount is out of range"))
}

/// Convert an amount in paisa to NPR
pub fn paisa_to_npr(paisa: u64) -> Decimal {
    Decimal::from(paisa) / Decimal::from(PAISA_PER_RUPEE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_npr_to_paisa() {
        assert_eq!(npr_to_paisa(Decimal::from(10)).unwrap(), 1000);
        assert_eq!(npr_to_paisa(Decimal::from_str("10.5").unwrap()).unwrap(), 1050);
        assert_eq!(npr_to_paisa(Decimal::from_str("0.01").unwrap()).unwrap(), 1);
        assert_eq!(npr_to_paisa(Decimal::ZERO).unwrap(), 0);
    }

    #[test]
    fn test_npr_to_paisa_rejects_sub_paisa() {
        let err = npr_to_paisa(Decimal::from_str("10.005").unwrap()).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
    }

    #[test]
    fn test_npr_to_paisa_rejects_negative() {
        let err = npr_to_paisa(Decimal::from_str("-1").unwrap()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_npr_to_paisa_out_of_range() {
        let err = npr_to_paisa(Decimal::MAX).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
        assert!(err.to_string().contains("Amount is out of range"));

        // Fits in a Decimal after scaling but not in a u64
        let err = npr_to_paisa(Decimal::from(u64::MAX)).unwrap_err();
        assert!(err.to_string().contains("Amount is out of range"));
    }

    #[test]
    fn test_paisa_to_npr() {
        assert_eq!(paisa_to_npr(1050), Decimal::from_str("10.5").unwrap());
        assert_eq!(paisa_to_npr(1), Decimal::from_str("0.01").unwrap());
    }
}
