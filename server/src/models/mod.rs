pub mod pricing;
pub mod refund;
pub mod ticket;

pub use pricing::{PriceCalculation, PriceValidation, DEFAULT_CURRENCY};
pub use refund::{RefundAmount, RefundType};
pub use ticket::{SaleStatus, TicketAvailability, TicketSales, TicketType};
