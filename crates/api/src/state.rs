//! Application state

use loanfee_core::FeeCalculator;
use std::sync::Arc;

/// Shared application state, bảng phí chỉ đọc nên không cần lock
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<FeeCalculator>,
}

impl AppState {
    pub fn new(calculator: FeeCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}
