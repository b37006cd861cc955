use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatSelection {
    #[serde(default)]
    pub row: i64,
    #[serde(default)]
    pub column: String,
}

/// Body of `POST /api/train/reserve`. Only the train identification is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub train_class: String,
    #[serde(default)]
    pub train_name: String,
    #[serde(default)]
    pub seat_class: String,
    #[serde(default)]
    pub car_number: i64,
    #[serde(default)]
    pub seats: Vec<SeatSelection>,
    #[serde(default)]
    pub passengers: u32,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl ReservationRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.train_class.is_empty() || self.train_name.is_empty() {
            return Err(CoreError::ValidationError("train_class and train_name are required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationResponse {
    pub reservation_id: String,
    pub is_ok: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Done,
}

/// Reservation history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatReservation {
    pub id: i64,
    pub payment_method: PaymentMethod,
    pub status: ReservationStatus,
    pub reserve_at: DateTime<Utc>,
}

/// Reservation ids arrive as a raw path segment and must be an unsigned integer.
pub fn parse_reservation_id(raw: &str) -> CoreResult<u64> {
    // u64::from_str alone would let a leading '+' through.
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::ValidationError(format!("reservation id {:?} is not numeric", raw)));
    }
    raw.parse::<u64>()
        .map_err(|_| CoreError::ValidationError(format!("reservation id {:?} is out of range", raw)))
}
