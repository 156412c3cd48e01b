use crate::client::ApiRequest;
use crate::errors::ScenarioResult;
use crate::expect::AUTH_REJECTED_OR_MISSING;
use crate::harness::Harness;

/// Outside the generator's id range, so no scenario ever creates it.
pub const NONEXISTENT_PET_ID: i64 = 9_876_543_210;

const INVALID_API_KEY: &str = "invalid-key";

/// Protected delete with no key, a wrong key and the valid key.
///
/// The pet store does not reliably enforce `api_key`, so each attempt only has to
/// end in an auth rejection or a not-found.
pub async fn protected_delete(harness: &Harness) -> ScenarioResult {
    let path = format!("/pet/{}", NONEXISTENT_PET_ID);
    let attempts = [
        ("no api_key", None),
        ("invalid api_key", Some(INVALID_API_KEY)),
        ("valid api_key", Some(harness.config().api_key.as_str())),
    ];
    for (what, key) in attempts {
        let mut request = ApiRequest::delete(path.as_str());
        if let Some(key) = key {
            request = request.header("api_key", key);
        }
        let response = harness.client().execute(request).await?;
        AUTH_REJECTED_OR_MISSING.check(&response, &format!("delete pet with {}", what))?;
    }
    Ok(())
}
