//! Core library - tính phí khởi tạo khoản vay
//!
//! Crate này chứa bảng phí (term -> breakpoint -> fee), capability nạp bảng phí
//! và engine nội suy tuyến tính + làm tròn tổng trả nợ lên bội số của 5.

pub mod calculator;
pub mod error;
pub mod loader;
pub mod models;
pub mod table;

pub use calculator::*;
pub use error::{FeeError, LoadError, Result};
pub use loader::*;
pub use models::*;
pub use table::*;
