pub mod availability;
pub mod health;
pub mod pricing;
pub mod refunds;

use axum::http::Uri;

use crate::utils::error::AppError;

pub use availability::ticket_availability;
pub use health::health_check;
pub use pricing::{quote_price, validate_price};
pub use refunds::quote_refund;

/// Router fallback for unknown paths.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for '{}'", uri.path()))
}
