use pretty_assertions::assert_eq;
use serde_json::json;
use warp::http::StatusCode;

use petstore_suite::scenarios::negative;

use crate::common::{setup_test_environment, setup_with, MockOptions};

#[tokio::test]
async fn test_error_paths() -> anyhow::Result<()> {
    let env = setup_test_environment();

    negative::error_paths(&env.harness).await?;

    Ok(())
}

#[tokio::test]
async fn test_error_paths_with_server_errors() -> anyhow::Result<()> {
    let env = setup_with(MockOptions {
        malformed_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..Default::default()
    });

    negative::error_paths(&env.harness).await?;

    Ok(())
}

#[tokio::test]
async fn test_malformed_user_not_stored() -> anyhow::Result<()> {
    let env = setup_test_environment();

    let response = env
        .harness
        .client()
        .post("/user", json!({ "id": "not-a-number", "username": 42 }))
        .await?;
    assert_eq!(response.code(), 400);
    assert_eq!(response.json()?["type"], "error");

    Ok(())
}
