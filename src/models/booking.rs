use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking lifecycle. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Transition table: pending can be decided either way, a confirmed
    /// booking can finish or be called off. Everything else is rejected.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub car_id: i64,
    pub pickup_date: chrono::NaiveDate,
    pub return_date: chrono::NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub user_id: i64,
    pub car_id: i64,
    pub pickup_date: chrono::NaiveDate,
    pub return_date: chrono::NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    // Quoted as computed by the client; stored as submitted.
    pub total_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub status: BookingStatus,
}

/// Admin listing row: booking joined with car and user display fields.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingRow {
    pub id: i64,
    pub user_id: i64,
    pub car_id: i64,
    pub car_name: String,
    pub car_image_url: String,
    pub user_name: String,
    pub user_email: String,
    pub pickup_date: chrono::NaiveDate,
    pub return_date: chrono::NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: chrono::NaiveDateTime,
}

/// Customer listing row: same join shape minus the user fields.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserBookingRow {
    pub id: i64,
    pub user_id: i64,
    pub car_id: i64,
    pub car_name: String,
    pub car_image_url: String,
    pub pickup_date: chrono::NaiveDate,
    pub return_date: chrono::NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: chrono::NaiveDateTime,
}
