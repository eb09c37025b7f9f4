//! Models của bài toán tính phí

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, Result};

/// Khoản vay cần tính phí: kỳ hạn (tháng) và số tiền vay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanProposal {
    term: u32,
    amount: Decimal,
}

impl LoanProposal {
    /// Tạo proposal mới, term phải > 0 và amount không âm
    pub fn new(term: u32, amount: Decimal) -> Result<Self> {
        if term == 0 {
            return Err(FeeError::InvalidInput(
                "term must be a positive number of months".to_string(),
            ));
        }
        if amount < Decimal::ZERO {
            return Err(FeeError::InvalidInput(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        Ok(Self { term, amount })
    }

    /// Term (loan duration) in months
    pub fn term(&self) -> u32 {
        self.term
    }

    /// Amount requested
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Hai breakpoint liền kề bao quanh amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    lower: Decimal,
    upper: Decimal,
}

impl Bounds {
    pub fn new(lower: Decimal, upper: Decimal) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> Decimal {
        self.lower
    }

    pub fn upper(&self) -> Decimal {
        self.upper
    }

    /// Khoảng cách giữa hai breakpoint
    pub fn width(&self) -> Decimal {
        self.upper - self.lower
    }
}

/// Chi tiết kết quả tính phí
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeQuote {
    pub term: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Phí trước khi làm tròn
    #[serde(with = "rust_decimal::serde::float")]
    pub base_fee: Decimal,
    /// Phí cuối cùng, amount + fee là bội số của 5
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// None khi amount trùng một breakpoint
    pub bounds: Option<Bounds>,
}

impl FeeQuote {
    pub fn is_interpolated(&self) -> bool {
        self.bounds.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_proposal() {
        let proposal = LoanProposal::new(12, dec!(1500)).unwrap();
        assert_eq!(proposal.term(), 12);
        assert_eq!(proposal.amount(), dec!(1500));
    }

    #[test]
    fn test_proposal_rejects_zero_term() {
        let err = LoanProposal::new(0, dec!(1000)).unwrap_err();
        assert!(matches!(err, FeeError::InvalidInput(_)));
    }

    #[test]
    fn test_proposal_rejects_negative_amount() {
        assert!(LoanProposal::new(12, dec!(-0.01)).is_err());
        assert!(LoanProposal::new(12, dec!(0)).is_ok());
    }

    #[test]
    fn test_bounds_width() {
        let bounds = Bounds::new(dec!(17000), dec!(18000));
        assert_eq!(bounds.lower(), dec!(17000));
        assert_eq!(bounds.upper(), dec!(18000));
        assert_eq!(bounds.width(), dec!(1000));
    }

    #[test]
    fn test_quote_serializes_numbers() {
        let quote = FeeQuote {
            term: 12,
            amount: dec!(1500),
            base_fee: dec!(70),
            fee: dec!(70),
            total: dec!(1570),
            bounds: Some(Bounds::new(dec!(1000), dec!(2000))),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["fee"], serde_json::json!(70.0));
        assert_eq!(json["total"], serde_json::json!(1570.0));
        assert!(quote.is_interpolated());
    }
}
