use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::models::RefundType;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    /// Amount originally charged, in minor currency units.
    pub amount: i64,
    pub refund_type: RefundType,
}

/// POST /api/refunds/quote
pub async fn quote_refund(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RefundRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    if request.amount < 0 {
        return Err(AppError::ValidationError(
            "Refund amount cannot be negative".to_string(),
        ));
    }

    let refund = state.fees.refund(request.amount, request.refund_type);

    tracing::debug!(
        amount = request.amount,
        refund_type = ?request.refund_type,
        net_refund = refund.net_refund,
        "Refund quote calculated"
    );

    Ok(success(refund, "Refund calculated"))
}
