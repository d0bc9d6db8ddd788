use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{SaleStatus, TicketAvailability, TicketSales, TicketType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Ticket sales have not started")]
    NotStarted,

    #[error("Ticket sales have ended")]
    Ended,

    #[error("Tickets are sold out")]
    SoldOut,

    #[error("Only {available} tickets remaining")]
    InsufficientCapacity { available: i64 },
}

/// Sale-window state at `now`. Both window boundaries are inclusive.
pub fn sale_status(ticket_type: &TicketType, now: DateTime<Utc>) -> SaleStatus {
    if ticket_type.sale_start.is_some_and(|start| now < start) {
        return SaleStatus::NotStarted;
    }
    if ticket_type.sale_end.is_some_and(|end| now > end) {
        return SaleStatus::Ended;
    }
    SaleStatus::Active
}

pub fn calculate_availability(
    ticket_type: &TicketType,
    sales: TicketSales,
    now: DateTime<Utc>,
) -> TicketAvailability {
    let sale_status = sale_status(ticket_type, now);
    let sold_count = sales.net_sold();
    let available_count = ticket_type
        .capacity
        .map(|capacity| capacity.saturating_sub(sold_count).max(0));

    let is_available =
        sale_status == SaleStatus::Active && available_count.map_or(true, |count| count > 0);

    TicketAvailability {
        total_capacity: ticket_type.capacity,
        sold_count,
        available_count,
        is_available,
        sale_status,
    }
}

/// Human-readable availability label, e.g. `"12 of 100 available"`.
pub fn format_availability_status(
    availability: &TicketAvailability,
    ticket_type: &TicketType,
) -> String {
    match availability.sale_status {
        SaleStatus::NotStarted => match ticket_type.sale_start {
            Some(start) => format!("Sales start {}", start.format("%-m/%-d/%Y")),
            None => "Sales not started".to_string(),
        },
        SaleStatus::Ended => "Sales ended".to_string(),
        SaleStatus::Active => match (availability.available_count, availability.total_capacity) {
            (Some(0), _) => "Sold out".to_string(),
            (None, _) | (_, None) => "Available".to_string(),
            (Some(available), Some(total)) => format!("{available} of {total} available"),
        },
    }
}

/// Checks whether `quantity` tickets can be bought right now.
pub fn check_purchase(
    availability: &TicketAvailability,
    quantity: i64,
) -> Result<(), AvailabilityError> {
    if quantity < 1 {
        return Err(AvailabilityError::InvalidQuantity);
    }

    match availability.sale_status {
        SaleStatus::NotStarted => return Err(AvailabilityError::NotStarted),
        SaleStatus::Ended => return Err(AvailabilityError::Ended),
        SaleStatus::Active => {}
    }

    match availability.available_count {
        Some(0) => Err(AvailabilityError::SoldOut),
        Some(available) if quantity > available => {
            Err(AvailabilityError::InsufficientCapacity { available })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn ticket(capacity: Option<i64>) -> TicketType {
        TicketType {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: "General Admission".to_string(),
            price: 2500,
            capacity,
            sale_start: None,
            sale_end: None,
            sort_order: 0,
        }
    }

    #[test]
    fn test_sold_out_when_capacity_reached() {
        let availability = calculate_availability(&ticket(Some(100)), TicketSales::new(100, 0), now());
        assert_eq!(availability.available_count, Some(0));
        assert!(!availability.is_available);
        assert_eq!(availability.sale_status, SaleStatus::Active);
    }

    #[test]
    fn test_oversold_clamps_to_zero() {
        let availability = calculate_availability(&ticket(Some(10)), TicketSales::new(12, 0), now());
        assert_eq!(availability.available_count, Some(0));
    }

    #[test]
    fn test_refunds_restore_capacity() {
        let availability = calculate_availability(&ticket(Some(100)), TicketSales::new(100, 5), now());
        assert_eq!(availability.sold_count, 95);
        assert_eq!(availability.available_count, Some(5));
        assert!(availability.is_available);
    }

    #[test]
    fn test_extreme_capacity_does_not_overflow() {
        let availability =
            calculate_availability(&ticket(Some(i64::MIN)), TicketSales::new(1, 0), now());
        assert_eq!(availability.available_count, Some(0));
        assert!(!availability.is_available);
    }

    #[test]
    fn test_unlimited_capacity_depends_on_window_only() {
        let mut t = ticket(None);
        let availability = calculate_availability(&t, TicketSales::new(5000, 0), now());
        assert_eq!(availability.available_count, None);
        assert!(availability.is_available);

        t.sale_end = Some(now() - Duration::hours(1));
        let availability = calculate_availability(&t, TicketSales::new(5000, 0), now());
        assert_eq!(availability.available_count, None);
        assert!(!availability.is_available);
    }

    #[test]
    fn test_sale_window_states() {
        let mut t = ticket(Some(10));
        t.sale_start = Some(now() + Duration::days(1));
        assert_eq!(sale_status(&t, now()), SaleStatus::NotStarted);

        t.sale_start = Some(now() - Duration::days(2));
        t.sale_end = Some(now() - Duration::days(1));
        assert_eq!(sale_status(&t, now()), SaleStatus::Ended);

        t.sale_end = Some(now() + Duration::days(1));
        assert_eq!(sale_status(&t, now()), SaleStatus::Active);
    }

    #[test]
    fn test_sale_window_boundaries_are_inclusive() {
        let mut t = ticket(None);
        t.sale_start = Some(now());
        t.sale_end = Some(now());
        assert_eq!(sale_status(&t, now()), SaleStatus::Active);
    }

    #[test]
    fn test_format_availability_status() {
        let mut t = ticket(Some(100));
        let a = calculate_availability(&t, TicketSales::new(88, 0), now());
        assert_eq!(format_availability_status(&a, &t), "12 of 100 available");

        let a = calculate_availability(&t, TicketSales::new(100, 0), now());
        assert_eq!(format_availability_status(&a, &t), "Sold out");

        t.sale_start = Some(Utc.with_ymd_and_hms(2026, 4, 2, 9, 0, 0).unwrap());
        let a = calculate_availability(&t, TicketSales::default(), now());
        assert_eq!(format_availability_status(&a, &t), "Sales start 4/2/2026");

        t.sale_start = None;
        t.sale_end = Some(now() - Duration::minutes(1));
        let a = calculate_availability(&t, TicketSales::default(), now());
        assert_eq!(format_availability_status(&a, &t), "Sales ended");

        let unlimited = ticket(None);
        let a = calculate_availability(&unlimited, TicketSales::default(), now());
        assert_eq!(format_availability_status(&a, &unlimited), "Available");
    }

    #[test]
    fn test_check_purchase() {
        let t = ticket(Some(10));
        let a = calculate_availability(&t, TicketSales::new(7, 0), now());
        assert!(check_purchase(&a, 3).is_ok());
        assert_eq!(
            check_purchase(&a, 4),
            Err(AvailabilityError::InsufficientCapacity { available: 3 })
        );
        assert_eq!(check_purchase(&a, 0), Err(AvailabilityError::InvalidQuantity));

        let sold_out = calculate_availability(&t, TicketSales::new(10, 0), now());
        assert_eq!(check_purchase(&sold_out, 1), Err(AvailabilityError::SoldOut));

        let unlimited = calculate_availability(&ticket(None), TicketSales::default(), now());
        assert!(check_purchase(&unlimited, 500).is_ok());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let t = ticket(Some(50));
        let sales = TicketSales::new(20, 2);
        assert_eq!(
            calculate_availability(&t, sales, now()),
            calculate_availability(&t, sales, now())
        );
    }
}
