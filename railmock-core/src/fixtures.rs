//! Canned response tables. Handlers only decide *whether* to answer; the
//! content of every successful answer comes from here.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::reservation::{PaymentMethod, ReservationResponse, ReservationStatus, SeatReservation};
use crate::search::{SeatAvailability, SeatClass, Station, Train, TrainSeat, TrainSeatSearchResponse};

pub const RESERVATION_ID: &str = "1111111111";
pub const HISTORY_RESERVATION_ID: i64 = 1111;

pub fn stations() -> Vec<Station> {
    vec![Station {
        id: 1,
        name: "isutrain1".to_string(),
        is_stop_express: false,
        is_stop_semi_express: false,
        is_stop_local: false,
    }]
}

pub fn seat_availability() -> BTreeMap<SeatClass, SeatAvailability> {
    BTreeMap::from([
        (SeatClass::Premium, SeatAvailability::Available),
        (SeatClass::PremiumSmoke, SeatAvailability::SoldOut),
        (SeatClass::Reserved, SeatAvailability::Few),
        (SeatClass::ReservedSmoke, SeatAvailability::Available),
        (SeatClass::NonReserved, SeatAvailability::Available),
    ])
}

pub fn seat_fares() -> BTreeMap<SeatClass, i64> {
    BTreeMap::from([
        (SeatClass::Premium, 24000),
        (SeatClass::PremiumSmoke, 24500),
        (SeatClass::Reserved, 19000),
        (SeatClass::ReservedSmoke, 19500),
        (SeatClass::NonReserved, 15000),
    ])
}

pub fn trains(now: DateTime<Utc>) -> Vec<Train> {
    let train = |class: &str, start: i64, last: i64, departure: &str, destination: &str| Train {
        train_class: class.to_string(),
        train_name: "96号".to_string(),
        start,
        last,
        departure: departure.to_string(),
        destination: destination.to_string(),
        departure_time: now,
        arrival_time: now,
        seat_availability: seat_availability(),
        seat_fare: seat_fares(),
    };

    vec![
        train("のぞみ", 1, 2, "東京", "名古屋"),
        train("こだま", 3, 4, "名古屋", "大阪"),
    ]
}

pub fn train_seats(now: DateTime<Utc>) -> TrainSeatSearchResponse {
    TrainSeatSearchResponse {
        date: now,
        train_class: "dummy".to_string(),
        train_name: "dummy".to_string(),
        car_number: 1,
        seats: vec![TrainSeat::default()],
    }
}

pub fn reservation_accepted() -> ReservationResponse {
    ReservationResponse {
        reservation_id: RESERVATION_ID.to_string(),
        is_ok: true,
    }
}

pub fn reservations(now: DateTime<Utc>) -> Vec<SeatReservation> {
    vec![SeatReservation {
        id: HISTORY_RESERVATION_ID,
        payment_method: PaymentMethod::CreditCard,
        status: ReservationStatus::Pending,
        reserve_at: now,
    }]
}
