use serde::{Deserialize, Serialize};

use bazaar_core::{DomainError, DomainResult};

/// Unit price of a product. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Subtotal for `quantity` units.
    pub fn times(self, quantity: u32) -> f64 {
        self.0 * f64::from(quantity)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
        assert_eq!(Price::new(12.5).unwrap().amount(), 12.5);
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Price::new(-0.01).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Price::new(amount), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: Price = serde_json::from_str("80.0").unwrap();
        assert_eq!(ok.amount(), 80.0);
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }

    #[test]
    fn times_multiplies_by_quantity() {
        let price = Price::new(50.0).unwrap();
        assert_eq!(price.times(3), 150.0);
        assert_eq!(price.times(0), 0.0);
    }
}
