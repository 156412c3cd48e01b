use pretty_assertions::assert_eq;

use petstore_suite::scenarios::user;
use petstore_suite::{ApiRequest, ScenarioError};

use crate::common::{setup_test_environment, setup_with, MockOptions};

#[tokio::test]
async fn test_user_lifecycle() -> anyhow::Result<()> {
    let env = setup_test_environment();

    user::user_lifecycle(&env.harness).await?;

    Ok(())
}

#[tokio::test]
async fn test_user_session() -> anyhow::Result<()> {
    let env = setup_test_environment();

    user::user_session(&env.harness).await?;

    Ok(())
}

/// 用户生命周期使用全新用户名，重复运行结果一致
#[tokio::test]
async fn test_user_lifecycle_repeatable() -> anyhow::Result<()> {
    let env = setup_test_environment();

    for _ in 0..3 {
        user::user_lifecycle(&env.harness).await?;
    }

    Ok(())
}

#[tokio::test]
async fn test_login_rejects_wrong_password() -> anyhow::Result<()> {
    let env = setup_test_environment();

    // 1. 创建用户
    let (user, response) = petstore_suite::entities::create_user(&env.harness).await?;
    assert_eq!(response.code(), 200);
    assert_eq!(env.mock.state.user(&user.username).unwrap()["email"], user.email.as_str());

    // 2. 错误密码无法登录
    let request = ApiRequest::get("/user/login")
        .query("username", &user.username)
        .query("password", "wrong");
    let response = env.harness.client().execute(request).await?;
    assert_eq!(response.code(), 400);

    Ok(())
}

/// 更新邮箱返回 404 时生命周期场景失败，用户未被删除
#[tokio::test]
async fn test_user_lifecycle_fails_when_update_lost() {
    let env = setup_with(MockOptions {
        lose_user_updates: true,
        ..Default::default()
    });

    let err = user::user_lifecycle(&env.harness).await.unwrap_err();
    assert!(matches!(err, ScenarioError::Assertion(_)), "{}", err);
    assert!(err.to_string().contains("update user email: expected status 200, got 404"));
}

/// 更新后的邮箱写入服务器
#[tokio::test]
async fn test_user_update_reaches_server() -> anyhow::Result<()> {
    let env = setup_test_environment();

    let (mut user, response) = petstore_suite::entities::create_user(&env.harness).await?;
    assert_eq!(response.code(), 200);

    user.email = "changed@example.com".to_string();
    let response = env
        .harness
        .client()
        .put(format!("/user/{}", user.username), serde_json::json!(user))
        .await?;
    assert_eq!(response.code(), 200);
    assert_eq!(
        env.mock.state.user(&user.username).unwrap()["email"],
        "changed@example.com"
    );

    Ok(())
}
