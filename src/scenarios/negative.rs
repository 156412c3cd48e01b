use serde_json::json;

use crate::errors::ScenarioResult;
use crate::expect::{self, NOT_FOUND};
use crate::harness::Harness;

const MALFORMED_PET_ID: &str = "invalid_id";

/// Error paths: unparseable id, unknown id, malformed user payload.
pub async fn error_paths(harness: &Harness) -> ScenarioResult {
    let response = harness.client().get(format!("/pet/{}", MALFORMED_PET_ID)).await?;
    NOT_FOUND.check(&response, "read pet with malformed id")?;

    let missing = harness.data().random_id();
    let response = harness.client().get(format!("/pet/{}", missing)).await?;
    NOT_FOUND.check(&response, &format!("read unknown pet {}", missing))?;

    let response = harness
        .client()
        .post("/user", json!({ "id": "not-a-number", "username": 42 }))
        .await?;
    expect::rejected(&response, "create malformed user")
}
