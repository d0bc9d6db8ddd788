use crate::pricing::FeeSchedule;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Fee rates used for quotes and customer-requested refunds.
    pub fees: FeeSchedule,
}

impl AppState {
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }
}
