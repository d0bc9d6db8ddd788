use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    /// Price in minor currency units (cents). Zero means free.
    pub price: i64,
    /// `None` means unlimited.
    pub capacity: Option<i64>,
    pub sale_start: Option<DateTime<Utc>>,
    pub sale_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sort_order: i32,
}

/// Sales bookkeeping for a ticket type. Refunded tickets go back into inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSales {
    pub sold_count: i64,
    #[serde(default)]
    pub refunded_count: i64,
}

impl TicketSales {
    pub fn new(sold_count: i64, refunded_count: i64) -> Self {
        Self {
            sold_count,
            refunded_count,
        }
    }

    pub fn net_sold(&self) -> i64 {
        self.sold_count.saturating_sub(self.refunded_count).max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    NotStarted,
    Active,
    Ended,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::NotStarted => "not_started",
            SaleStatus::Active => "active",
            SaleStatus::Ended => "ended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAvailability {
    pub total_capacity: Option<i64>,
    pub sold_count: i64,
    /// `None` means unlimited.
    pub available_count: Option<i64>,
    pub is_available: bool,
    pub sale_status: SaleStatus,
}
