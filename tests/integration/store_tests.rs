use pretty_assertions::assert_eq;

use petstore_suite::expect::DELETED_OR_GONE;
use petstore_suite::scenarios::store;

use crate::common::setup_test_environment;

#[tokio::test]
async fn test_order_lifecycle() -> anyhow::Result<()> {
    let env = setup_test_environment();

    store::order_lifecycle(&env.harness).await?;

    // 订单已删除，宠物保留（无清理）
    assert_eq!(env.mock.state.order_count(), 0);
    assert_eq!(env.mock.state.pet_count(), 1);

    Ok(())
}

/// 删除不存在的订单返回 404，也在可接受集合中
#[tokio::test]
async fn test_delete_missing_order() -> anyhow::Result<()> {
    let env = setup_test_environment();
    let order_id = env.harness.data().random_id();

    let response = env
        .harness
        .client()
        .delete(format!("/store/order/{}", order_id))
        .await?;
    assert_eq!(response.code(), 404);
    DELETED_OR_GONE.check(&response, "delete missing order")?;

    Ok(())
}

#[tokio::test]
async fn test_inventory() -> anyhow::Result<()> {
    let env = setup_test_environment();

    // 1. 创建宠物
    let (_, response) = petstore_suite::entities::create_pet(&env.harness).await?;
    assert_eq!(response.code(), 200);

    // 2. 场景通过
    store::inventory(&env.harness).await?;

    // 3. 库存合计等于宠物数
    let inventory = env.harness.client().get("/store/inventory").await?.json()?;
    let total: u64 = inventory
        .as_object()
        .unwrap()
        .values()
        .filter_map(|v| v.as_u64())
        .sum();
    assert_eq!(total, 1);

    Ok(())
}
