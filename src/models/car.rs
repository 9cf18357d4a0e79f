use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub passengers: i64,
    pub transmission: String,
    pub fuel: String,
    pub image_url: String,
    pub rating: f64,
    pub seats: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub car_type: String,
    pub capacity: String,
    pub is_electric: bool,
    pub is_featured: bool,
    pub description: String,
}

/// Create/update payload. Updates are full replacement, so every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub passengers: i64,
    pub transmission: String,
    pub fuel: String,
    pub image_url: String,
    pub rating: f64,
    pub seats: i64,
    #[serde(rename = "type")]
    pub car_type: String,
    pub capacity: String,
    pub is_electric: bool,
    pub is_featured: bool,
    pub description: String,
}
