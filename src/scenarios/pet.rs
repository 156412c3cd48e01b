use serde_json::{json, Value};

use crate::client::ApiRequest;
use crate::entities::{self, PET_NAME};
use crate::errors::ScenarioResult;
use crate::expect::{self, NOT_FOUND, OK};
use crate::harness::Harness;
use crate::model::Pet;

const UPDATED_NAME: &str = "UpdatedPet";

/// Valid pet is accepted and can be read back by its id.
pub async fn create_valid(harness: &Harness) -> ScenarioResult {
    let (pet_id, response) = entities::create_pet(harness).await?;
    OK.check(&response, "create pet")?;
    let created: Pet = response.json_as()?;
    check!(created.id == pet_id, "created pet has id {}, sent {}", created.id, pet_id);

    let response = harness.client().get(format!("/pet/{}", pet_id)).await?;
    OK.check(&response, "read created pet")?;
    let fetched: Pet = response.json_as()?;
    check!(fetched.id == pet_id, "read pet {} returned id {}", pet_id, fetched.id);
    check!(fetched.name == PET_NAME, "pet {} is named {:?}", pet_id, fetched.name);
    Ok(())
}

/// A pet without name and photo URLs is rejected.
pub async fn create_invalid(harness: &Harness) -> ScenarioResult {
    let data = harness.data().generate();
    let response = harness
        .client()
        .post("/pet", json!({ "id": data.unique_id, "status": "available" }))
        .await?;
    expect::rejected(&response, "create pet without required fields")
}

/// Renamed pet is returned with its new name.
pub async fn update(harness: &Harness) -> ScenarioResult {
    let mut pet = entities::new_pet(harness);
    let response = harness.client().post("/pet", json!(pet)).await?;
    OK.check(&response, "create pet")?;

    pet.name = UPDATED_NAME.to_string();
    let response = harness.client().put("/pet", json!(pet)).await?;
    OK.check(&response, "update pet")?;

    let response = harness.client().get(format!("/pet/{}", pet.id)).await?;
    OK.check(&response, "read updated pet")?;
    let fetched: Pet = response.json_as()?;
    check!(
        fetched.name == UPDATED_NAME,
        "pet {} still named {:?} after update",
        pet.id,
        fetched.name
    );
    Ok(())
}

/// Every known status can be listed and yields a JSON array.
pub async fn list_by_status(harness: &Harness) -> ScenarioResult {
    for status in harness.data().generate().statuses {
        let request = ApiRequest::get("/pet/findByStatus").query("status", status.as_str());
        let response = harness.client().execute(request).await?;
        OK.check(&response, &format!("find pets with status {}", status))?;
        let body = response.json()?;
        check!(
            matches!(body, Value::Array(_)),
            "findByStatus?status={} returned a non-array body",
            status
        );
    }
    Ok(())
}

/// Deleted pet is no longer readable.
pub async fn delete(harness: &Harness) -> ScenarioResult {
    let (pet_id, response) = entities::create_pet(harness).await?;
    OK.check(&response, "create pet")?;

    let request = ApiRequest::delete(format!("/pet/{}", pet_id))
        .header("api_key", &harness.config().api_key);
    let response = harness.client().execute(request).await?;
    OK.check(&response, "delete pet")?;

    let response = harness.client().get(format!("/pet/{}", pet_id)).await?;
    NOT_FOUND.check(&response, "read deleted pet")
}
