//! Shared helpers for handler tests: an in-memory database with the real
//! migrations applied, plus seeding shortcuts.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    std::env::set_var("JWT_SECRET", "test-secret");

    // Single connection: an in-memory database vanishes with its last
    // connection, so the pool must never open a second one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn auth_header() -> (&'static str, String) {
    std::env::set_var("JWT_SECRET", "test-secret");
    let token = crate::auth::issue_token(1, "admin@example.com").unwrap();
    ("Authorization", format!("Bearer {token}"))
}

pub fn sample_car(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": "Sedan",
        "price": 45.0,
        "oldPrice": 55.0,
        "passengers": 5,
        "transmission": "Automatic",
        "fuel": "Petrol",
        "imageUrl": "https://cdn.example.com/car.jpg",
        "rating": 4.5,
        "seats": 5,
        "type": "sedan",
        "capacity": "5 People",
        "isElectric": false,
        "isFeatured": true,
        "description": "A reliable sedan."
    })
}

pub async fn seed_car(pool: &SqlitePool, name: &str, price: f64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO cars (name, category, price, old_price, passengers, transmission,
                          fuel, image_url, rating, seats, type, capacity, is_electric,
                          is_featured, description)
        VALUES (?, 'Sedan', ?, NULL, 5, 'Automatic', 'Petrol',
                'https://cdn.example.com/car.jpg', 4.5, 5, 'sedan', '5 People', 0, 0, 'Seeded car')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(price)
    .fetch_one(pool)
    .await
    .expect("Failed to seed car")
}

pub async fn seed_user(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (email, password, name, age) VALUES (?, 'seed-hash', 'Seed User', 30) \
         RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user")
}

pub async fn seed_booking(
    pool: &SqlitePool,
    user_id: i64,
    car_id: i64,
    pickup: &str,
    ret: &str,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO bookings (user_id, car_id, pickup_date, return_date,
                              pickup_location, return_location, total_price, status)
        VALUES (?, ?, ?, ?, 'Airport', 'Airport', 100.0, ?)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(car_id)
    .bind(pickup)
    .bind(ret)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("Failed to seed booking")
}
