use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub is_stop_express: bool,
    pub is_stop_semi_express: bool,
    pub is_stop_local: bool,
}

/// Fare/availability tier. Serialized as the map keys of a train record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    Premium,
    PremiumSmoke,
    Reserved,
    ReservedSmoke,
    NonReserved,
}

impl SeatClass {
    pub const ALL: [SeatClass; 5] = [
        SeatClass::Premium,
        SeatClass::PremiumSmoke,
        SeatClass::Reserved,
        SeatClass::ReservedSmoke,
        SeatClass::NonReserved,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatAvailability {
    #[serde(rename = "○")]
    Available,
    #[serde(rename = "△")]
    Few,
    #[serde(rename = "×")]
    SoldOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Train {
    pub train_class: String,
    pub train_name: String,
    pub start: i64,
    pub last: i64,
    pub departure: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub seat_availability: BTreeMap<SeatClass, SeatAvailability>,
    pub seat_fare: BTreeMap<SeatClass, i64>,
}

/// A single physical seat inside the car named by the enclosing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainSeat {
    pub row: i64,
    pub column: String,
    pub class: String,
    pub is_smoking_seat: bool,
    pub is_occupied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSeatSearchResponse {
    pub date: DateTime<Utc>,
    pub train_class: String,
    pub train_name: String,
    pub car_number: i64,
    pub seats: Vec<TrainSeat>,
}

// ============================================================================
// Query validation
// ============================================================================

/// Raw query of `GET /api/train/search`. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct TrainSearchQuery {
    pub use_at: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainSearchCriteria {
    pub use_at: DateTime<Utc>,
    pub from: String,
    pub to: String,
}

impl TrainSearchQuery {
    pub fn validate(self) -> CoreResult<TrainSearchCriteria> {
        let raw = self
            .use_at
            .ok_or_else(|| CoreError::ValidationError("use_at is required".into()))?;
        let use_at = parse_iso8601(&raw)?;
        if is_zero_instant(&use_at) {
            return Err(CoreError::ValidationError("use_at is the zero instant".into()));
        }

        let from = non_empty(self.from, "from")?;
        let to = non_empty(self.to, "to")?;

        Ok(TrainSearchCriteria { use_at, from, to })
    }
}

/// Raw query of `GET /api/train/search/seats`.
#[derive(Debug, Default, Deserialize)]
pub struct TrainSeatQuery {
    pub train_class: Option<String>,
    pub train_name: Option<String>,
    pub car_number: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainSeatCriteria {
    pub train_class: String,
    pub train_name: String,
    pub car_number: u32,
    pub from: String,
    pub to: String,
}

impl TrainSeatQuery {
    pub fn validate(self) -> CoreResult<TrainSeatCriteria> {
        let train_class = non_empty(self.train_class, "train_class")?;
        let train_name = non_empty(self.train_name, "train_name")?;
        let from = non_empty(self.from, "from")?;
        let to = non_empty(self.to, "to")?;

        let car_number = self
            .car_number
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| CoreError::ValidationError("car_number must be a positive integer".into()))?;

        Ok(TrainSeatCriteria { train_class, train_name, car_number, from, to })
    }
}

fn non_empty(value: Option<String>, field: &str) -> CoreResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::ValidationError(format!("{} is required", field)))
}

/// Accepts RFC 3339, a naive date-time (read as UTC) or a plain date (midnight UTC).
pub fn parse_iso8601(raw: &str) -> CoreResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(CoreError::ValidationError(format!("not an ISO 8601 instant: {:?}", raw)))
}

/// `0001-01-01T00:00:00Z`, the value clients send when they leave a timestamp unset.
pub fn is_zero_instant(instant: &DateTime<Utc>) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|zero| instant.naive_utc() == zero)
        .unwrap_or(false)
}
