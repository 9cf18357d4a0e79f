use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::user::PublicUser;

pub async fn get_users(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let users = sqlx::query_as::<_, PublicUser>(
        "SELECT id, email, name, age, created_at FROM users",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user_by_id(
    _user: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let user = sqlx::query_as::<_, PublicUser>(
        "SELECT id, email, name, age, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("User"))?;

    Ok(HttpResponse::Ok().json(user))
}
