use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundType {
    /// Organizer cancelled the event; fees are absorbed by the platform.
    FullCancellation,
    /// Purchaser asked for a refund while the event still happens.
    CustomerRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundAmount {
    pub original_amount: i64,
    pub stripe_fee: i64,
    pub net_refund: i64,
}
