use serde_json::Value;

use crate::entities;
use crate::errors::{ScenarioError, ScenarioResult};
use crate::expect::{DELETED_OR_GONE, OK};
use crate::harness::Harness;
use crate::model::Order;

/// Order for a fresh pet: create, read back, delete.
///
/// The delete accepts 404 as well, since leftovers from earlier runs or
/// a concurrent cleanup may already have removed it.
pub async fn order_lifecycle(harness: &Harness) -> ScenarioResult {
    let (pet_id, response) = entities::create_pet(harness).await?;
    OK.check(&response, "create pet for order")?;

    let (order_id, response) = entities::create_order(harness, pet_id).await?;
    OK.check(&response, "place order")?;

    let response = harness.client().get(format!("/store/order/{}", order_id)).await?;
    OK.check(&response, "read order")?;
    let order: Order = response.json_as()?;
    check!(
        order.pet_id == pet_id,
        "order {} references pet {}, expected {}",
        order_id,
        order.pet_id,
        pet_id
    );

    let response = harness.client().delete(format!("/store/order/{}", order_id)).await?;
    DELETED_OR_GONE.check(&response, "delete order")
}

/// Inventory is a status -> count map.
pub async fn inventory(harness: &Harness) -> ScenarioResult {
    let response = harness.client().get("/store/inventory").await?;
    OK.check(&response, "read inventory")?;
    match response.json()? {
        Value::Object(counts) => {
            for (status, count) in &counts {
                check!(
                    count.is_i64() || count.is_u64(),
                    "inventory count for {:?} is not an integer: {}",
                    status,
                    count
                );
            }
            Ok(())
        }
        other => Err(ScenarioError::Assertion(format!(
            "inventory is not an object: {}",
            other
        ))),
    }
}
