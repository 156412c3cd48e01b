use std::time::Duration;

use petstore_suite::{Config, Harness, RetryPolicy};

use super::mock_server::{MockOptions, MockPetstore};

pub struct TestEnvironment {
    pub mock: MockPetstore,
    pub harness: Harness,
}

/// 初始化测试日志（重复调用无副作用）
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 指向 `base_url` 的快速配置：短等待、短重试间隔
pub fn test_config(base_url: &str) -> Config {
    Config::default()
        .with_base_url(base_url)
        .unwrap()
        .with_request_timeout(Duration::from_secs(10))
        .with_consistency_delay(Duration::from_millis(10))
        .with_flaky_retry(RetryPolicy::fixed(3, Duration::from_millis(5)))
}

/// 创建测试环境：启动模拟服务器并构建 Harness
pub fn setup_test_environment() -> TestEnvironment {
    setup_with(MockOptions::default())
}

pub fn setup_with(options: MockOptions) -> TestEnvironment {
    init_logging();

    // 1. 启动模拟服务器
    let mock = MockPetstore::start(options);

    // 2. 构建 Harness
    let harness = Harness::new(test_config(&mock.base_url())).unwrap();

    TestEnvironment { mock, harness }
}
