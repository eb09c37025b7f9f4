//! Bảng phí: term -> (amount breakpoint -> base fee)
//!
//! Định dạng JSON:
//! ```json
//! { "12": { "1000": 50, "2000": 90 }, "24": { "1000": 70, "2000": 100 } }
//! ```

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::LoadError;

/// Các breakpoint của một term, luôn duyệt theo amount tăng dần
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    fees: BTreeMap<Decimal, Decimal>,
}

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thêm breakpoint, trả về fee cũ nếu amount đã tồn tại
    pub fn insert(&mut self, amount: Decimal, fee: Decimal) -> Option<Decimal> {
        self.fees.insert(amount, fee)
    }

    /// Fee của breakpoint trùng khớp chính xác với amount
    pub fn fee_at(&self, amount: Decimal) -> Option<Decimal> {
        self.fees.get(&amount).copied()
    }

    /// (amount, fee) theo amount tăng dần
    pub fn iter(&self) -> impl Iterator<Item = (Decimal, Decimal)> + '_ {
        self.fees.iter().map(|(amount, fee)| (*amount, *fee))
    }

    pub fn amounts(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.fees.keys().copied()
    }

    pub fn min_amount(&self) -> Option<Decimal> {
        self.fees.keys().next().copied()
    }

    pub fn max_amount(&self) -> Option<Decimal> {
        self.fees.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }
}

impl FromIterator<(Decimal, Decimal)> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = (Decimal, Decimal)>>(iter: I) -> Self {
        Self {
            fees: iter.into_iter().collect(),
        }
    }
}

/// Toàn bộ bảng phí, immutable sau khi nạp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeStructure {
    terms: BTreeMap<u32, BreakpointSet>,
}

impl FeeStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: thêm (hoặc thay thế) breakpoints cho một term
    pub fn with_term<I>(mut self, term: u32, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        self.terms.insert(term, breakpoints.into_iter().collect());
        self
    }

    /// Breakpoints của term, None nếu term không có trong bảng
    pub fn breakpoints(&self, term: u32) -> Option<&BreakpointSet> {
        self.terms.get(&term)
    }

    /// Các term theo thứ tự tăng dần
    pub fn terms(&self) -> impl Iterator<Item = u32> + '_ {
        self.terms.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, BreakpointSet> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Parse và validate bảng phí từ JSON
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, BTreeMap<String, Decimal>> = serde_json::from_str(content)?;

        let mut structure = FeeStructure::new();
        for (term_key, fees) in raw {
            let term = parse_term(&term_key)?;

            let mut breakpoints = BreakpointSet::new();
            for (amount_key, fee) in fees {
                let amount = parse_amount(term, &amount_key)?;
                if fee < Decimal::ZERO {
                    return Err(LoadError::Validation(format!(
                        "term {}: fee {} for amount {} is negative",
                        term, fee, amount
                    )));
                }
                if breakpoints.insert(amount, fee).is_some() {
                    return Err(LoadError::Validation(format!(
                        "term {}: duplicate breakpoint {}",
                        term, amount
                    )));
                }
            }

            match structure.terms.entry(term) {
                Entry::Occupied(_) => {
                    return Err(LoadError::Validation(format!("duplicate term {}", term)));
                }
                Entry::Vacant(slot) => {
                    slot.insert(breakpoints);
                }
            }
        }

        structure.validate()?;
        Ok(structure)
    }

    /// Mỗi term phải có ít nhất một breakpoint
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.terms.is_empty() {
            return Err(LoadError::Validation(
                "fee structure has no terms".to_string(),
            ));
        }
        if let Some((term, _)) = self.terms.iter().find(|(_, set)| set.is_empty()) {
            return Err(LoadError::Validation(format!(
                "term {} has no breakpoints",
                term
            )));
        }
        Ok(())
    }
}

fn parse_term(key: &str) -> Result<u32, LoadError> {
    match key.trim().parse::<u32>() {
        Ok(term) if term > 0 => Ok(term),
        _ => Err(LoadError::Validation(format!(
            "term '{}' is not a positive integer",
            key
        ))),
    }
}

fn parse_amount(term: u32, key: &str) -> Result<Decimal, LoadError> {
    let amount = Decimal::from_str(key.trim()).map_err(|_| {
        LoadError::Validation(format!("term {}: amount '{}' is not a number", term, key))
    })?;
    if amount < Decimal::ZERO {
        return Err(LoadError::Validation(format!(
            "term {}: amount {} is negative",
            term, amount
        )));
    }
    Ok(amount)
}
