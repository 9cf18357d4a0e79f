use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::booking::BookingStatus;
use crate::models::car::{Car, CarPayload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySearch {
    pub pickup_date: chrono::NaiveDate,
    pub dropoff_date: chrono::NaiveDate,
}

pub async fn get_cars(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars")
        .fetch_all(pool.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(cars))
}

/// Cars with no overlapping non-cancelled booking in [pickup, dropoff).
///
/// Overlap is the half-open interval test: an existing booking blocks a car
/// when `existing.pickup_date < dropoff AND existing.return_date > pickup`,
/// so a booking that ends exactly on the requested pickup date does not
/// count. Exclusion is a set-membership filter on distinct car ids, one
/// check per car no matter how many bookings overlap.
pub async fn search_cars(
    pool: web::Data<SqlitePool>,
    params: web::Query<AvailabilitySearch>,
) -> Result<HttpResponse, ApiError> {
    if params.pickup_date >= params.dropoff_date {
        return Err(ApiError::InvalidRange);
    }

    let cars = sqlx::query_as::<_, Car>(
        r#"
        SELECT * FROM cars
        WHERE id NOT IN (
            SELECT DISTINCT car_id FROM bookings
            WHERE status != ?
              AND pickup_date < ?
              AND return_date > ?
        )
        "#,
    )
    .bind(BookingStatus::Cancelled)
    .bind(params.dropoff_date)
    .bind(params.pickup_date)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(cars))
}

pub async fn get_car_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::NotFound("Car"))?;

    Ok(HttpResponse::Ok().json(car))
}

pub async fn create_car(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    body: web::Json<CarPayload>,
) -> Result<HttpResponse, ApiError> {
    let car = sqlx::query_as::<_, Car>(
        r#"
        INSERT INTO cars (name, category, price, old_price, passengers, transmission,
                          fuel, image_url, rating, seats, type, capacity, is_electric,
                          is_featured, description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(&body.category)
    .bind(body.price)
    .bind(body.old_price)
    .bind(body.passengers)
    .bind(&body.transmission)
    .bind(&body.fuel)
    .bind(&body.image_url)
    .bind(body.rating)
    .bind(body.seats)
    .bind(&body.car_type)
    .bind(&body.capacity)
    .bind(body.is_electric)
    .bind(body.is_featured)
    .bind(&body.description)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(car))
}

pub async fn update_car(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CarPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    // Full replacement: every column is overwritten from the payload.
    let car = sqlx::query_as::<_, Car>(
        r#"
        UPDATE cars
        SET name = ?, category = ?, price = ?, old_price = ?, passengers = ?,
            transmission = ?, fuel = ?, image_url = ?, rating = ?, seats = ?,
            type = ?, capacity = ?, is_electric = ?, is_featured = ?, description = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(&body.category)
    .bind(body.price)
    .bind(body.old_price)
    .bind(body.passengers)
    .bind(&body.transmission)
    .bind(&body.fuel)
    .bind(&body.image_url)
    .bind(body.rating)
    .bind(body.seats)
    .bind(&body.car_type)
    .bind(&body.capacity)
    .bind(body.is_electric)
    .bind(body.is_featured)
    .bind(&body.description)
    .bind(id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Car"))?;

    Ok(HttpResponse::Ok().json(car))
}

/// No referential check against bookings: deleting a car with active bookings
/// leaves them pointing at a gone id.
pub async fn delete_car(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM cars WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Car"));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Car deleted successfully" })))
}
