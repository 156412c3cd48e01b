#[macro_use]
extern crate anyhow;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

#[macro_use]
pub mod errors;

pub mod client;
pub mod config;
pub mod entities;
pub mod expect;
pub mod harness;
pub mod model;
pub mod retry;
pub mod runner;
pub mod scenarios;
pub mod test_data;

pub use crate::client::{ApiClient, ApiRequest, ApiResponse};
pub use crate::config::Config;
pub use crate::errors::{ScenarioError, ScenarioResult};
pub use crate::expect::StatusSet;
pub use crate::harness::Harness;
pub use crate::retry::{retry, RetryPolicy};
pub use crate::runner::{run_scenario, run_suite, Outcome, ScenarioReport, SuiteReport};
pub use crate::scenarios::Scenario;
pub use crate::test_data::{PetStatus, TestData, TestDataGenerator};
