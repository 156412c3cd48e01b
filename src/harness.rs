use anyhow::{Context, Result};

use crate::client::ApiClient;
use crate::config::Config;
use crate::test_data::TestDataGenerator;

/// Per-run context every scenario receives: settings, HTTP client and test data source.
pub struct Harness {
    config: Config,
    client: ApiClient,
    data: TestDataGenerator,
}

impl Harness {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config).context("failed to build HTTP client")?;
        let data = match config.seed {
            Some(seed) => TestDataGenerator::with_seed(seed),
            None => TestDataGenerator::new(),
        };
        info!("testing pet store at {}", config.base());
        Ok(Self {
            config,
            client,
            data,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn data(&self) -> &TestDataGenerator {
        &self.data
    }
}
