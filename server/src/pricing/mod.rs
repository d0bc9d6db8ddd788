//! Pure pricing, availability and refund calculations.
//!
//! Money is always `i64` minor currency units. Nothing here performs I/O or
//! reads the clock; callers pass `now` explicitly.

pub mod availability;
pub mod currency;
pub mod fees;
pub mod refund;

pub use availability::{
    calculate_availability, check_purchase, format_availability_status, sale_status,
    AvailabilityError,
};
pub use currency::{convert_to_major_units, convert_to_minor_units, format_price, format_usd};
pub use fees::{
    calculate_customer_total, calculate_order_subtotal, calculate_processor_fee,
    validate_ticket_price, FeeSchedule, PriceError,
};
pub use refund::calculate_refund_amount;
