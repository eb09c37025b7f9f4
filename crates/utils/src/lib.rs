//! Utils library - Các hàm tiện ích dùng chung
//!
//! Config, validate input chưa tin cậy (term, amount) và helpers cho CLI/API.

pub mod config;
pub mod helpers;
pub mod validation;

pub use config::*;
pub use helpers::*;
pub use validation::*;
