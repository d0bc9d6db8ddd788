use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PriceCalculation, RefundAmount, RefundType, DEFAULT_CURRENCY};

/// Basis points denominator, 10000 = 100%.
pub const BPS_DENOMINATOR: i64 = 10_000;

pub const MIN_PAID_PRICE: i64 = 50;
pub const MAX_PRICE: i64 = 9_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("Price cannot be negative")]
    Negative,

    #[error("Minimum price is $0.50 for paid tickets")]
    BelowPaidMinimum,

    #[error("Maximum price is $99,999.99")]
    AboveMaximum,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Order total is too large")]
    Overflow,
}

/// Processor and platform fee rates. Percentages are in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub processor_rate_bps: i64,
    pub processor_fixed_fee: i64,
    pub application_rate_bps: i64,
    /// Fixed fee kept back on customer-requested refunds.
    pub refund_retained_fee: i64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            processor_rate_bps: 290,
            processor_fixed_fee: 30,
            application_rate_bps: 300,
            refund_retained_fee: 30,
        }
    }
}

impl FeeSchedule {
    pub fn processor_fee(&self, subtotal: i64) -> i64 {
        apply_bps(subtotal, self.processor_rate_bps).saturating_add(self.processor_fixed_fee)
    }

    pub fn application_fee(&self, subtotal: i64) -> i64 {
        apply_bps(subtotal, self.application_rate_bps)
    }

    /// The fixed processor fee applies even to a zero subtotal.
    pub fn calculate(&self, subtotal: i64, currency: &str) -> PriceCalculation {
        let stripe_fee = self.processor_fee(subtotal);
        let application_fee = self.application_fee(subtotal);

        PriceCalculation {
            subtotal,
            stripe_fee,
            application_fee,
            total: subtotal
                .saturating_add(stripe_fee)
                .saturating_add(application_fee),
            currency: currency.to_ascii_uppercase(),
        }
    }

    pub fn refund(&self, original_amount: i64, refund_type: RefundType) -> RefundAmount {
        let stripe_fee = match refund_type {
            RefundType::FullCancellation => 0,
            RefundType::CustomerRequest => self.refund_retained_fee,
        };

        RefundAmount {
            original_amount,
            stripe_fee,
            net_refund: original_amount.saturating_sub(stripe_fee).max(0),
        }
    }
}

/// `amount * bps / 10000`, rounded half up.
fn apply_bps(amount: i64, bps: i64) -> i64 {
    let scaled = i128::from(amount) * i128::from(bps);
    let half = i128::from(BPS_DENOMINATOR / 2);
    let rounded = (scaled + half).div_euclid(i128::from(BPS_DENOMINATOR));
    rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

pub fn calculate_processor_fee(subtotal: i64) -> PriceCalculation {
    FeeSchedule::default().calculate(subtotal, DEFAULT_CURRENCY)
}

pub fn calculate_customer_total(ticket_price: i64) -> i64 {
    calculate_processor_fee(ticket_price).total
}

pub fn validate_ticket_price(price: i64) -> Result<(), PriceError> {
    if price < 0 {
        return Err(PriceError::Negative);
    }
    if price > 0 && price < MIN_PAID_PRICE {
        return Err(PriceError::BelowPaidMinimum);
    }
    if price > MAX_PRICE {
        return Err(PriceError::AboveMaximum);
    }
    Ok(())
}

/// Price times quantity for a multi-ticket order, after validating both.
pub fn calculate_order_subtotal(price: i64, quantity: i64) -> Result<i64, PriceError> {
    validate_ticket_price(price)?;
    if quantity < 1 {
        return Err(PriceError::InvalidQuantity);
    }
    price.checked_mul(quantity).ok_or(PriceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_fee_standard_ticket() {
        let calc = calculate_processor_fee(2500);
        assert_eq!(
            calc,
            PriceCalculation {
                subtotal: 2500,
                stripe_fee: 103,
                application_fee: 75,
                total: 2678,
                currency: "USD".to_string(),
            }
        );
    }

    #[test]
    fn test_processor_fee_zero_subtotal_keeps_fixed_fee() {
        let calc = calculate_processor_fee(0);
        assert_eq!(calc.stripe_fee, 30);
        assert_eq!(calc.application_fee, 0);
        assert_eq!(calc.total, 30);
    }

    #[test]
    fn test_fee_rounding_half_up() {
        // 1000 * 2.9% = 29.0, 1000 * 3% = 30.0
        let calc = calculate_processor_fee(1000);
        assert_eq!((calc.stripe_fee, calc.application_fee), (59, 30));

        // 50 * 3% = 1.5 rounds to 2; 50 * 2.9% = 1.45 rounds to 1
        let calc = calculate_processor_fee(50);
        assert_eq!((calc.stripe_fee, calc.application_fee), (31, 2));
    }

    #[test]
    fn test_customer_total_matches_processor_total() {
        for price in [0, 50, 2500, 9_999_999] {
            assert_eq!(calculate_customer_total(price), calculate_processor_fee(price).total);
        }
    }

    #[test]
    fn test_custom_schedule_and_currency() {
        let schedule = FeeSchedule {
            processor_rate_bps: 0,
            processor_fixed_fee: 0,
            application_rate_bps: 500,
            refund_retained_fee: 100,
        };
        let calc = schedule.calculate(2000, "eur");
        assert_eq!(calc.total, 2100);
        assert_eq!(calc.currency, "EUR");
        assert_eq!(schedule.refund(80, RefundType::CustomerRequest).net_refund, 0);
    }

    #[test]
    fn test_validate_ticket_price() {
        assert_eq!(validate_ticket_price(-1), Err(PriceError::Negative));
        assert_eq!(validate_ticket_price(25), Err(PriceError::BelowPaidMinimum));
        assert_eq!(validate_ticket_price(10_000_000), Err(PriceError::AboveMaximum));
        assert!(validate_ticket_price(0).is_ok());
        assert!(validate_ticket_price(50).is_ok());
        assert!(validate_ticket_price(MAX_PRICE).is_ok());
    }

    #[test]
    fn test_price_error_messages() {
        assert_eq!(PriceError::Negative.to_string(), "Price cannot be negative");
        assert_eq!(
            PriceError::BelowPaidMinimum.to_string(),
            "Minimum price is $0.50 for paid tickets"
        );
        assert_eq!(PriceError::AboveMaximum.to_string(), "Maximum price is $99,999.99");
    }

    #[test]
    fn test_order_subtotal() {
        assert_eq!(calculate_order_subtotal(2500, 4), Ok(10_000));
        assert_eq!(calculate_order_subtotal(0, 3), Ok(0));
        assert_eq!(calculate_order_subtotal(2500, 0), Err(PriceError::InvalidQuantity));
        assert_eq!(calculate_order_subtotal(10, 2), Err(PriceError::BelowPaidMinimum));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(calculate_processor_fee(4321), calculate_processor_fee(4321));
        assert_eq!(validate_ticket_price(30), validate_ticket_price(30));
    }
}
