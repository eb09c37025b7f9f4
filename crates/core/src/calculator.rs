//! Fee calculator - nội suy tuyến tính trên bảng phí
//!
//! Quy trình cho một khoản vay (term, amount):
//! 1. Lấy breakpoints của term (không có -> `UnknownTerm`)
//! 2. amount trùng breakpoint -> dùng fee của breakpoint đó
//! 3. Ngược lại tìm hai breakpoint liền kề bao quanh amount và nội suy
//! 4. Làm tròn sao cho amount + fee là bội số của 5 (làm tròn lên)

use rust_decimal::Decimal;

use crate::error::{FeeError, LoadError, Result};
use crate::loader::FeeStructureSource;
use crate::models::{Bounds, FeeQuote, LoanProposal};
use crate::table::{BreakpointSet, FeeStructure};

/// Tổng trả nợ (amount + fee) được làm tròn lên bội số của giá trị này
pub const ROUNDING_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Engine tính phí, giữ bảng phí immutable nên có thể share qua `Arc`
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    structure: FeeStructure,
}

impl FeeCalculator {
    /// Tạo calculator từ một nguồn bảng phí
    pub fn new<S: FeeStructureSource>(source: &S) -> std::result::Result<Self, LoadError> {
        Ok(Self {
            structure: source.load()?,
        })
    }

    /// Tạo calculator từ bảng phí đã nạp sẵn
    pub fn from_structure(structure: FeeStructure) -> Self {
        Self { structure }
    }

    pub fn structure(&self) -> &FeeStructure {
        &self.structure
    }

    /// Phí cuối cùng cho khoản vay
    pub fn calculate(&self, proposal: &LoanProposal) -> Result<Decimal> {
        self.quote(proposal).map(|quote| quote.fee)
    }

    /// Shortcut cho `calculate` với giá trị đã parse
    pub fn fee_for(&self, term: u32, amount: Decimal) -> Result<Decimal> {
        self.calculate(&LoanProposal::new(term, amount)?)
    }

    /// Tính phí kèm chi tiết (phí gốc, bounds, tổng trả nợ)
    pub fn quote(&self, proposal: &LoanProposal) -> Result<FeeQuote> {
        let term = proposal.term();
        let amount = proposal.amount();

        let fees = self
            .structure
            .breakpoints(term)
            .ok_or(FeeError::UnknownTerm(term))?;

        let (base_fee, bounds) = match fees.fee_at(amount) {
            Some(fee) => {
                log::debug!("term {}: amount {} is a breakpoint, fee {}", term, amount, fee);
                (fee, None)
            }
            None => {
                let bounds =
                    bounds(amount, fees).ok_or(FeeError::AmountOutOfRange { term, amount })?;
                let (lower_fee, upper_fee) = bracket_fees(fees, &bounds, term, amount)?;
                let fee = interpolate(amount, &bounds, lower_fee, upper_fee)?;
                log::debug!(
                    "term {}: amount {} between {} and {}, interpolated fee {}",
                    term,
                    amount,
                    bounds.lower(),
                    bounds.upper(),
                    fee
                );
                (fee, Some(bounds))
            }
        };

        let fee = round_up_fee(base_fee, amount)?;
        let total = amount
            .checked_add(fee)
            .ok_or(FeeError::Overflow { amount })?;
        Ok(FeeQuote {
            term,
            amount,
            base_fee,
            fee,
            total,
            bounds,
        })
    }
}

fn bracket_fees(
    fees: &BreakpointSet,
    bounds: &Bounds,
    term: u32,
    amount: Decimal,
) -> Result<(Decimal, Decimal)> {
    match (fees.fee_at(bounds.lower()), fees.fee_at(bounds.upper())) {
        (Some(lower_fee), Some(upper_fee)) => Ok((lower_fee, upper_fee)),
        _ => Err(FeeError::AmountOutOfRange { term, amount }),
    }
}

/// Tìm hai breakpoint liền kề bao quanh amount.
///
/// Duyệt breakpoints tăng dần: lower là breakpoint cuối cùng <= amount, upper là
/// breakpoint đầu tiên > amount và dừng ngay tại đó. Thiếu một trong hai thì
/// amount nằm ngoài bảng phí (không ngoại suy).
pub fn bounds(amount: Decimal, fees: &BreakpointSet) -> Option<Bounds> {
    let mut lower = None;
    let mut upper = None;

    for breakpoint in fees.amounts() {
        if breakpoint <= amount {
            lower = Some(breakpoint);
        } else {
            upper = Some(breakpoint);
            break;
        }
    }

    Some(Bounds::new(lower?, upper?))
}

/// Nội suy tuyến tính giữa hai breakpoint.
///
/// Nhân trước rồi chia để giữ kết quả chính xác; nếu tích vượt giới hạn của
/// `Decimal` (đoạn rất rộng) thì chia trước.
pub fn interpolate(
    amount: Decimal,
    bounds: &Bounds,
    lower_fee: Decimal,
    upper_fee: Decimal,
) -> Result<Decimal> {
    let overflow = || FeeError::Overflow { amount };

    let offset = amount.checked_sub(bounds.lower()).ok_or_else(overflow)?;
    let rise = upper_fee.checked_sub(lower_fee).ok_or_else(overflow)?;
    let width = bounds.width();

    let step = match offset.checked_mul(rise) {
        Some(product) => product.checked_div(width),
        None => offset
            .checked_div(width)
            .and_then(|ratio| ratio.checked_mul(rise)),
    }
    .ok_or_else(overflow)?;

    lower_fee.checked_add(step).ok_or_else(overflow)
}

/// Làm tròn để amount + fee là bội số của 5 (làm tròn lên)
pub fn round_up_fee(fee: Decimal, amount: Decimal) -> Result<Decimal> {
    fee.checked_add(amount)
        .and_then(|total| total.checked_div(ROUNDING_STEP))
        .and_then(|steps| steps.ceil().checked_mul(ROUNDING_STEP))
        .and_then(|rounded| rounded.checked_sub(amount))
        .ok_or(FeeError::Overflow { amount })
}
