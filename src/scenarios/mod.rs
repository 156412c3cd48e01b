//! End-to-end scenarios against the pet store.
//!
//! Each scenario is a linear sequence of requests and status/body checks; the
//! first failing check ends it. Scenarios share nothing but the [`Harness`].

pub mod auth;
pub mod consistency;
pub mod negative;
pub mod pet;
pub mod store;
pub mod user;

use futures::future::BoxFuture;

use std::fmt;

use crate::config::Config;
use crate::errors::ScenarioResult;
use crate::harness::Harness;
use crate::retry::RetryPolicy;

pub type ScenarioFn = for<'a> fn(&'a Harness) -> BoxFuture<'a, ScenarioResult>;

macro_rules! scenario_fn {
    ($f:path) => {{
        fn run(harness: &Harness) -> BoxFuture<'_, ScenarioResult> {
            Box::pin($f(harness))
        }
        run as ScenarioFn
    }};
}

#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
    /// Set for scenarios that depend on remote timing.
    pub retry: Option<RetryPolicy>,
}

impl Scenario {
    pub fn new(name: &'static str, run: ScenarioFn) -> Self {
        Self {
            name,
            run,
            retry: None,
        }
    }

    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn is_flaky(&self) -> bool {
        self.retry.is_some()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("retry", &self.retry)
            .finish()
    }
}

/// The whole suite, in execution order.
pub fn suite(config: &Config) -> Vec<Scenario> {
    vec![
        Scenario::new("pet_create_valid", scenario_fn!(pet::create_valid)),
        Scenario::new("pet_create_invalid", scenario_fn!(pet::create_invalid)),
        Scenario::new("pet_update", scenario_fn!(pet::update)),
        Scenario::new("pet_list_by_status", scenario_fn!(pet::list_by_status)),
        Scenario::new("pet_delete", scenario_fn!(pet::delete)),
        Scenario::new("order_lifecycle", scenario_fn!(store::order_lifecycle)),
        Scenario::new("store_inventory", scenario_fn!(store::inventory)),
        Scenario::new("user_lifecycle", scenario_fn!(user::user_lifecycle)),
        Scenario::new("user_session", scenario_fn!(user::user_session)),
        Scenario::new("protected_delete", scenario_fn!(auth::protected_delete)),
        Scenario::new("error_paths", scenario_fn!(negative::error_paths)),
        Scenario::new("read_after_write", scenario_fn!(consistency::read_after_write))
            .with_retry(config.flaky_retry),
    ]
}

/// Look a scenario up by name.
pub fn find(config: &Config, name: &str) -> Option<Scenario> {
    suite(config).into_iter().find(|s| s.name == name)
}
