use tokio::time::sleep;

use crate::entities;
use crate::errors::ScenarioResult;
use crate::expect::OK;
use crate::harness::Harness;

/// A freshly created pet becomes readable after `consistency_delay`.
///
/// Writes are not immediately visible on the pet store, so the suite runs this
/// scenario under `Config::flaky_retry`.
pub async fn read_after_write(harness: &Harness) -> ScenarioResult {
    let (pet_id, response) = entities::create_pet(harness).await?;
    OK.check(&response, "create pet")?;

    sleep(harness.config().consistency_delay).await;

    let response = harness.client().get(format!("/pet/{}", pet_id)).await?;
    OK.check(&response, &format!("read pet {} after write", pet_id))
}
