use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::booking::{
    AdminBookingRow, Booking, BookingStatus, CreateBooking, UpdateStatus, UserBookingRow,
};

pub async fn get_bookings(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let bookings = sqlx::query_as::<_, AdminBookingRow>(
        r#"
        SELECT b.id, b.user_id, b.car_id,
               c.name AS car_name, c.image_url AS car_image_url,
               u.name AS user_name, u.email AS user_email,
               b.pickup_date, b.return_date, b.pickup_location, b.return_location,
               b.total_price, b.status, b.created_at
        FROM bookings b
        JOIN cars c ON b.car_id = c.id
        JOIN users u ON b.user_id = u.id
        ORDER BY b.created_at DESC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn get_user_bookings(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let bookings = sqlx::query_as::<_, UserBookingRow>(
        r#"
        SELECT b.id, b.user_id, b.car_id,
               c.name AS car_name, c.image_url AS car_image_url,
               b.pickup_date, b.return_date, b.pickup_location, b.return_location,
               b.total_price, b.status, b.created_at
        FROM bookings b
        JOIN cars c ON b.car_id = c.id
        WHERE b.user_id = ?
        ORDER BY b.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(bookings))
}

/// Creates a booking in `pending` state.
///
/// The availability re-check and the insert run inside one transaction, so
/// two racing requests for the same car and overlapping dates cannot both
/// land. `total_price` is stored as the client submitted it.
pub async fn create_booking(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    if body.pickup_date >= body.return_date {
        return Err(ApiError::InvalidRange);
    }

    let mut tx = pool.begin().await?;

    let car_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars WHERE id = ?")
        .bind(body.car_id)
        .fetch_one(&mut *tx)
        .await?;
    if car_exists == 0 {
        return Err(ApiError::NotFound("Car"));
    }

    // Same half-open overlap predicate the search uses.
    let overlapping: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE car_id = ?
          AND status != ?
          AND pickup_date < ?
          AND return_date > ?
        "#,
    )
    .bind(body.car_id)
    .bind(BookingStatus::Cancelled)
    .bind(body.return_date)
    .bind(body.pickup_date)
    .fetch_one(&mut *tx)
    .await?;
    if overlapping > 0 {
        return Err(ApiError::CarUnavailable);
    }

    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (user_id, car_id, pickup_date, return_date,
                              pickup_location, return_location, total_price, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(body.user_id)
    .bind(body.car_id)
    .bind(body.pickup_date)
    .bind(body.return_date)
    .bind(&body.pickup_location)
    .bind(&body.return_location)
    .bind(body.total_price)
    .bind(BookingStatus::Pending)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!(
        "Booking {} created: car {} from {} to {}",
        booking.id,
        booking.car_id,
        booking.pickup_date,
        booking.return_date
    );
    Ok(HttpResponse::Created().json(booking))
}

pub async fn update_booking_status(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateStatus>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let current: BookingStatus =
        sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(pool.get_ref())
            .await?
            .ok_or(ApiError::NotFound("Booking"))?;

    if !current.can_transition_to(body.status) {
        return Err(ApiError::InvalidTransition {
            from: current,
            to: body.status,
        });
    }

    sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
        .bind(body.status)
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Booking updated successfully",
        "status": body.status
    })))
}

pub async fn delete_booking(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Booking"));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Booking deleted successfully" })))
}
