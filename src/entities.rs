//! Helpers that turn fresh test data into remote pet store state.
//!
//! None of them assert on the response; callers decide what counts as a pass.
//! Nothing created here is cleaned up afterwards.

use chrono::Utc;
use serde_json::json;

use crate::client::ApiResponse;
use crate::errors::ScenarioResult;
use crate::harness::Harness;
use crate::model::{Order, Pet, User};

pub const PET_NAME: &str = "TestPet";
pub const PHOTO_URL: &str = "http://example.com/photo.jpg";
pub const USER_PASSWORD: &str = "password123";

/// A complete, valid pet with a fresh id and a random status.
pub fn new_pet(harness: &Harness) -> Pet {
    let data = harness.data().generate();
    Pet {
        id: data.unique_id,
        name: PET_NAME.to_string(),
        photo_urls: vec![PHOTO_URL.to_string()],
        status: harness.data().random_status(),
    }
}

pub fn new_user(harness: &Harness) -> User {
    let data = harness.data().generate();
    User {
        email: format!("{}@example.com", data.username),
        username: data.username,
        password: USER_PASSWORD.to_string(),
    }
}

/// `POST /pet`; returns the id that was sent along with the raw response.
pub async fn create_pet(harness: &Harness) -> ScenarioResult<(i64, ApiResponse)> {
    let pet = new_pet(harness);
    let response = harness.client().post("/pet", json!(pet)).await?;
    Ok((pet.id, response))
}

/// `POST /store/order` for one unit of `pet_id`.
pub async fn create_order(harness: &Harness, pet_id: i64) -> ScenarioResult<(i64, ApiResponse)> {
    let order = Order::placed(harness.data().random_id(), pet_id, Utc::now());
    let response = harness.client().post("/store/order", json!(order)).await?;
    Ok((order.id, response))
}

/// `POST /user`; returns the full user so later steps can log in with it.
pub async fn create_user(harness: &Harness) -> ScenarioResult<(User, ApiResponse)> {
    let user = new_user(harness);
    let response = harness.client().post("/user", json!(user)).await?;
    Ok((user, response))
}
