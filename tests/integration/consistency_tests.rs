use std::time::Duration;

use petstore_suite::scenarios::{self, consistency};
use petstore_suite::{run_scenario, Outcome, ScenarioError};

use crate::common::{setup_with, MockOptions};

/// 写入后需要若干次读取才可见：重试吸收延迟
#[tokio::test]
async fn test_read_after_write_retried() {
    let env = setup_with(MockOptions {
        stale_reads: 2,
        ..Default::default()
    });
    let scenario = scenarios::find(env.harness.config(), "read_after_write").unwrap();

    let report = run_scenario(&env.harness, &scenario).await;
    assert!(report.outcome.is_passed(), "{:?}", report.outcome);
    assert_eq!(env.mock.state.stale_reads_left(), 0);
    // 每次重试都创建新宠物
    assert_eq!(env.mock.state.pet_count(), 3);
}

#[tokio::test]
async fn test_read_after_write_gives_up() {
    let env = setup_with(MockOptions {
        stale_reads: 10,
        ..Default::default()
    });
    let scenario = scenarios::find(env.harness.config(), "read_after_write").unwrap();

    let report = run_scenario(&env.harness, &scenario).await;
    match report.outcome {
        Outcome::Failed(ScenarioError::RetriesExhausted { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(env.mock.state.stale_reads_left(), 7);
}

/// 单次执行不带重试：第一次陈旧读取即失败
#[tokio::test]
async fn test_read_after_write_single_attempt() {
    let env = setup_with(MockOptions {
        stale_reads: 1,
        ..Default::default()
    });

    let err = consistency::read_after_write(&env.harness).await.unwrap_err();
    assert!(matches!(err, ScenarioError::Assertion(_)));
}

/// 等待时间来自配置
#[tokio::test]
async fn test_read_after_write_waits() -> anyhow::Result<()> {
    let env = setup_with(MockOptions::default());
    let start = std::time::Instant::now();

    consistency::read_after_write(&env.harness).await?;
    assert!(start.elapsed() >= Duration::from_millis(10));

    Ok(())
}
