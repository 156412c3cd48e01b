use std::fmt;
use std::time::{Duration, Instant};

use crate::errors::ScenarioError;
use crate::harness::Harness;
use crate::retry::{retry, RetryPolicy};
use crate::scenarios::Scenario;

#[derive(Debug)]
pub enum Outcome {
    Passed,
    /// The remote answered, but not as expected.
    Failed(ScenarioError),
    /// No usable answer (transport failure, bad URL).
    Errored(ScenarioError),
}

impl Outcome {
    fn from_result(result: Result<(), ScenarioError>) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(e) if e.is_failure() => Outcome::Failed(e),
            Err(e) => Outcome::Errored(e),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored(_)))
    }

    pub fn is_success(&self) -> bool {
        self.scenarios.iter().all(|r| r.outcome.is_passed())
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|r| r.name == name)
    }

    fn count(&self, f: impl Fn(&Outcome) -> bool) -> usize {
        self.scenarios.iter().filter(|r| f(&r.outcome)).count()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for report in &self.scenarios {
            match &report.outcome {
                Outcome::Passed => writeln!(f, "PASS  {} ({:?})", report.name, report.elapsed)?,
                Outcome::Failed(e) => writeln!(f, "FAIL  {}: {}", report.name, e)?,
                Outcome::Errored(e) => writeln!(f, "ERROR {}: {}", report.name, e)?,
            }
        }
        write!(
            f,
            "{} passed, {} failed, {} errored",
            self.passed(),
            self.failed(),
            self.errored()
        )
    }
}

/// Run one scenario, re-executing it per its retry policy if it has one.
pub async fn run_scenario(harness: &Harness, scenario: &Scenario) -> ScenarioReport {
    info!("running {}", scenario.name);
    let start = Instant::now();
    let run = scenario.run;
    let policy = scenario.retry.unwrap_or_else(RetryPolicy::none);
    let result = retry(&policy, scenario.name, move || run(harness)).await;
    let outcome = Outcome::from_result(result);
    let elapsed = start.elapsed();

    match &outcome {
        Outcome::Passed => info!("{} passed in {:?}", scenario.name, elapsed),
        Outcome::Failed(e) => warn!("{} failed: {}", scenario.name, e),
        Outcome::Errored(e) => error!("{} errored: {}", scenario.name, e),
    }
    ScenarioReport {
        name: scenario.name,
        outcome,
        elapsed,
    }
}

/// Run `scenarios` one after another; a failing scenario never stops the rest.
pub async fn run_suite(harness: &Harness, scenarios: &[Scenario]) -> SuiteReport {
    let mut report = SuiteReport::default();
    for scenario in scenarios {
        report.scenarios.push(run_scenario(harness, scenario).await);
    }
    report
}
