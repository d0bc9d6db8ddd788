use crate::models::{RefundAmount, RefundType};
use crate::pricing::fees::FeeSchedule;

/// Net refund for a purchase, using the default fee schedule.
///
/// Cancellations by the organizer are refunded in full. Customer-requested
/// refunds keep the fixed processor fee; the proportional fee is not
/// deducted again. The net refund never drops below zero.
pub fn calculate_refund_amount(original_amount: i64, refund_type: RefundType) -> RefundAmount {
    FeeSchedule::default().refund(original_amount, refund_type)
}
