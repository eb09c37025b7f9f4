//! Helper functions

use rust_decimal::Decimal;
use std::time::{SystemTime, UNIX_EPOCH};

/// Lấy timestamp hiện tại (Unix epoch seconds)
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Hiển thị số tiền, bỏ các số 0 thừa sau dấu thập phân
pub fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(70.000)), "70");
        assert_eq!(format_amount(dec!(102.50)), "102.5");
        assert_eq!(format_amount(dec!(1500.94)), "1500.94");
    }

    #[test]
    fn test_timestamp() {
        let ts = current_timestamp_secs();
        assert!(ts > 0);
    }
}
