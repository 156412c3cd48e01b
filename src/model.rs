use chrono::{DateTime, SecondsFormat, Utc};

use crate::test_data::PetStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub status: PetStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Approved,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub pet_id: i64,
    pub quantity: u32,
    pub ship_date: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub complete: bool,
}

impl Order {
    /// A completed single-item order for `pet_id`, shipping at `ship_date`.
    pub fn placed(id: i64, pet_id: i64, ship_date: DateTime<Utc>) -> Self {
        Self {
            id,
            pet_id,
            quantity: 1,
            ship_date: ship_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: OrderStatus::Placed,
            complete: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generic `{code, type, message}` envelope returned by user and delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
