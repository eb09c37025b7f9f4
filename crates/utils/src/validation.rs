//! Validation cho input chưa tin cậy (query string, tham số CLI)

use rust_decimal::Decimal;
use std::str::FromStr;

/// Kết quả validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Tạo kết quả valid
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Tạo kết quả invalid
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Gộp các lỗi thành một message
    pub fn message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Validate term: số nguyên dương (tháng)
pub fn validate_term(input: &str) -> Result<u32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("term is required".to_string());
    }

    match input.parse::<u32>() {
        Ok(0) => Err("term must be greater than 0".to_string()),
        Ok(term) => Ok(term),
        Err(_) => Err(format!("term '{}' is not a positive integer", input)),
    }
}

/// Validate amount: số thập phân không âm
pub fn validate_amount(input: &str) -> Result<Decimal, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("amount is required".to_string());
    }

    let amount = Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| format!("amount '{}' is not a number", input))?;

    if amount < Decimal::ZERO {
        return Err(format!("amount must not be negative, got {}", amount));
    }
    Ok(amount)
}

/// Validate cả term và amount, thu thập tất cả lỗi
pub fn validate_loan_query(term: &str, amount: &str) -> Result<(u32, Decimal), ValidationResult> {
    match (validate_term(term), validate_amount(amount)) {
        (Ok(term), Ok(amount)) => Ok((term, amount)),
        (term, amount) => {
            let errors = [term.err(), amount.err()].into_iter().flatten().collect();
            Err(ValidationResult::invalid(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_term() {
        assert_eq!(validate_term("12"), Ok(12));
        assert_eq!(validate_term(" 24 "), Ok(24));
        assert!(validate_term("0").is_err());
        assert!(validate_term("-12").is_err());
        assert!(validate_term("12.5").is_err());
        assert!(validate_term("").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("1500"), Ok(dec!(1500)));
        assert_eq!(validate_amount("1500.94"), Ok(dec!(1500.94)));
        assert_eq!(validate_amount("1.5e3"), Ok(dec!(1500)));
        assert_eq!(validate_amount("0"), Ok(dec!(0)));
        assert!(validate_amount("-1").is_err());
        assert!(validate_amount("abc").is_err());
        assert!(validate_amount("<script>").is_err());
        assert!(validate_amount("  ").is_err());
    }

    #[test]
    fn test_validate_loan_query() {
        assert_eq!(validate_loan_query("12", "1500").unwrap(), (12, dec!(1500)));

        let result = validate_loan_query("x", "y").unwrap_err();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.message().contains("term"));
        assert!(result.message().contains("amount"));
    }

    #[test]
    fn test_validation_result() {
        assert!(ValidationResult::valid().is_valid);
        assert_eq!(
            ValidationResult::invalid(vec!["a".into(), "b".into()]).message(),
            "a; b"
        );
    }
}
