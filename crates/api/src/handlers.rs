//! API Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use loanfee_core::{FeeError, FeeQuote, LoanProposal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============ Response Types ============

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            data: None,
            error: Some(message.into()),
        })
    }
}

#[derive(Serialize)]
pub struct TermSummary {
    pub term: u32,
    pub breakpoints: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub min_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_amount: Decimal,
}

#[derive(Serialize)]
pub struct Breakpoint {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
}

#[derive(Serialize)]
pub struct TermDetail {
    pub term: u32,
    pub breakpoints: Vec<Breakpoint>,
}

// ============ Request Types ============

/// Query string còn ở dạng raw string, validate trước khi vào core
#[derive(Deserialize)]
pub struct FeeQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub amount: String,
}

fn status_of(error: &FeeError) -> StatusCode {
    StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "terms": state.calculator.structure().len(),
        "timestamp": loanfee_utils::current_timestamp_secs()
    }))
}

/// Calculate the fee for a loan
pub async fn calculate_fee(
    State(state): State<AppState>,
    Query(query): Query<FeeQuery>,
) -> impl IntoResponse {
    let (term, amount) = match loanfee_utils::validate_loan_query(&query.term, &query.amount) {
        Ok(parsed) => parsed,
        Err(result) => {
            return (
                StatusCode::BAD_REQUEST,
                ApiResponse::<FeeQuote>::error(result.message()),
            )
        }
    };

    let quote = LoanProposal::new(term, amount)
        .and_then(|proposal| state.calculator.quote(&proposal));

    match quote {
        Ok(quote) => (StatusCode::OK, ApiResponse::success(quote)),
        Err(e) => {
            log::warn!("fee calculation failed for term {} amount {}: {}", term, amount, e);
            (status_of(&e), ApiResponse::error(e.to_string()))
        }
    }
}

/// List available terms
pub async fn list_terms(State(state): State<AppState>) -> impl IntoResponse {
    let terms: Vec<TermSummary> = state
        .calculator
        .structure()
        .iter()
        .map(|(term, breakpoints)| TermSummary {
            term: *term,
            breakpoints: breakpoints.len(),
            min_amount: breakpoints.min_amount().unwrap_or_default(),
            max_amount: breakpoints.max_amount().unwrap_or_default(),
        })
        .collect();
    ApiResponse::success(terms)
}

/// Get breakpoints of one term
pub async fn get_term(
    State(state): State<AppState>,
    Path(term): Path<u32>,
) -> impl IntoResponse {
    match state.calculator.structure().breakpoints(term) {
        Some(breakpoints) => {
            let detail = TermDetail {
                term,
                breakpoints: breakpoints
                    .iter()
                    .map(|(amount, fee)| Breakpoint { amount, fee })
                    .collect(),
            };
            (StatusCode::OK, ApiResponse::success(detail))
        }
        None => {
            let e = FeeError::UnknownTerm(term);
            (status_of(&e), ApiResponse::error(e.to_string()))
        }
    }
}
