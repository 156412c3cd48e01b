use serde_json::json;

use crate::client::ApiRequest;
use crate::entities;
use crate::errors::ScenarioResult;
use crate::expect::OK;
use crate::harness::Harness;
use crate::model::{ApiMessage, User};

async fn login(harness: &Harness, user: &User) -> ScenarioResult {
    // credentials travel as query parameters; that is how the pet store defines login
    let request = ApiRequest::get("/user/login")
        .query("username", &user.username)
        .query("password", &user.password);
    let response = harness.client().execute(request).await?;
    OK.check(&response, &format!("log in as {}", user.username))
}

/// Create, log in, change email, delete.
pub async fn user_lifecycle(harness: &Harness) -> ScenarioResult {
    let (mut user, response) = entities::create_user(harness).await?;
    OK.check(&response, "create user")?;
    let created: ApiMessage = response.json_as()?;
    check!(created.code == 200, "create user answered with code {}", created.code);

    login(harness, &user).await?;

    user.email = format!("updated_{}@example.com", user.username);
    let response = harness
        .client()
        .put(format!("/user/{}", user.username), json!(user))
        .await?;
    OK.check(&response, "update user email")?;

    let response = harness.client().delete(format!("/user/{}", user.username)).await?;
    OK.check(&response, "delete user")
}

/// Log in and out again.
pub async fn user_session(harness: &Harness) -> ScenarioResult {
    let (user, response) = entities::create_user(harness).await?;
    OK.check(&response, "create user")?;

    login(harness, &user).await?;

    let response = harness.client().get("/user/logout").await?;
    OK.check(&response, "log out")
}
