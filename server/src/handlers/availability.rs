use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{TicketAvailability, TicketSales, TicketType};
use crate::pricing::{calculate_availability, check_purchase, format_availability_status};
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub ticket_type: TicketType,
    #[serde(flatten)]
    pub sales: TicketSales,
    /// When set, the purchase of this many tickets is checked as well.
    pub quantity: Option<i64>,
    /// Evaluation time; defaults to the server clock.
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    #[serde(flatten)]
    pub availability: TicketAvailability,
    pub status_label: String,
}

fn reject_negative_counts(request: &AvailabilityRequest) -> Result<(), AppError> {
    let counts = [
        ("sold_count", Some(request.sales.sold_count)),
        ("refunded_count", Some(request.sales.refunded_count)),
        ("capacity", request.ticket_type.capacity),
    ];

    match counts.iter().find(|(_, value)| value.is_some_and(|v| v < 0)) {
        Some((field, _)) => Err(AppError::ValidationError(format!(
            "{field} cannot be negative"
        ))),
        None => Ok(()),
    }
}

/// POST /api/tickets/availability
pub async fn ticket_availability(
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    reject_negative_counts(&request)?;
    let now = request.as_of.unwrap_or_else(Utc::now);

    let availability = calculate_availability(&request.ticket_type, request.sales, now);

    if let Some(quantity) = request.quantity {
        check_purchase(&availability, quantity)?;
    }

    tracing::debug!(
        ticket_type_id = %request.ticket_type.id,
        status = availability.sale_status.as_str(),
        available = ?availability.available_count,
        "Availability calculated"
    );

    let response = AvailabilityResponse {
        status_label: format_availability_status(&availability, &request.ticket_type),
        availability,
    };

    Ok(success(response, "Availability calculated"))
}
