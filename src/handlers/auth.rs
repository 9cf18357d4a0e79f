use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth;
use crate::error::ApiError;
use crate::models::user::{AuthResponse, LoginRequest, PublicUser, RegisterRequest, User};

pub async fn register(
    pool: web::Data<SqlitePool>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    // Exact, case-sensitive match; the column's UNIQUE constraint backs this up.
    let taken: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(&body.email)
        .fetch_one(pool.get_ref())
        .await?;
    if taken > 0 {
        return Err(ApiError::DuplicateEmail);
    }

    let hashed = auth::hash_password(&body.password)?;

    let user = sqlx::query_as::<_, PublicUser>(
        r#"
        INSERT INTO users (email, password, name, age)
        VALUES (?, ?, ?, ?)
        RETURNING id, email, name, age, created_at
        "#,
    )
    .bind(&body.email)
    .bind(&hashed)
    .bind(&body.name)
    .bind(body.age)
    .fetch_one(pool.get_ref())
    .await?;

    let access_token = auth::issue_token(user.id, &user.email)?;

    log::info!("Registered user {} ({})", user.id, user.email);
    Ok(HttpResponse::Created().json(AuthResponse { access_token, user }))
}

pub async fn login(
    pool: web::Data<SqlitePool>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&body.email)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !auth::verify_password(&body.password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = auth::issue_token(user.id, &user.email)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        user: PublicUser {
            id: user.id,
            email: user.email,
            name: user.name,
            age: user.age,
            created_at: user.created_at,
        },
    }))
}
