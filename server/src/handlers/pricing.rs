use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::{PriceCalculation, PriceValidation, DEFAULT_CURRENCY};
use crate::pricing::{calculate_order_subtotal, format_price, validate_ticket_price};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Unit ticket price in minor currency units.
    pub price: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub currency: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

/// ISO 4217 shape: three ASCII letters.
fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub calculation: PriceCalculation,
    pub quantity: i64,
    pub formatted_subtotal: String,
    pub formatted_total: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub price: i64,
}

/// POST /api/pricing/quote
///
/// Fee breakdown and customer total for `quantity` tickets at `price`.
pub async fn quote_price(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let currency = match request.currency.as_deref() {
        Some(code) if is_currency_code(code) => code,
        Some(code) => {
            return Err(AppError::ValidationError(format!(
                "Invalid currency code '{code}'"
            )))
        }
        None => DEFAULT_CURRENCY,
    };

    let subtotal = calculate_order_subtotal(request.price, request.quantity)?;
    let calculation = state.fees.calculate(subtotal, currency);

    tracing::debug!(
        price = request.price,
        quantity = request.quantity,
        total = calculation.total,
        "Price quote calculated"
    );

    let response = QuoteResponse {
        formatted_subtotal: format_price(calculation.subtotal, &calculation.currency),
        formatted_total: format_price(calculation.total, &calculation.currency),
        quantity: request.quantity,
        calculation,
    };

    Ok(success(response, "Price quote calculated"))
}

/// POST /api/pricing/validate
///
/// Always answers 200; the verdict is in `isValid`/`error`.
pub async fn validate_price(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let validation = PriceValidation::from(validate_ticket_price(request.price));

    Ok(success(validation, "Price validated"))
}
