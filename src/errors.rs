use thiserror::Error;

/// Everything that can end a scenario early.
///
/// Assertion-like variants are *failures* (the remote answered, but not the
/// way we expected); transport-like variants are *errors* (we never got a
/// usable answer).
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<ScenarioError>,
    },
}

impl ScenarioError {
    /// `true` for outcomes the runner reports as a failed scenario, `false`
    /// for outcomes it reports as an erroring one.
    pub fn is_failure(&self) -> bool {
        match self {
            ScenarioError::Assertion(_) | ScenarioError::Json(_) => true,
            ScenarioError::RetriesExhausted { last, .. } => last.is_failure(),
            ScenarioError::Transport(_) | ScenarioError::Url(_) => false,
        }
    }
}

pub type ScenarioResult<T = ()> = std::result::Result<T, ScenarioError>;

/// Bail out of the current scenario with an assertion failure unless `$cond` holds.
#[macro_export]
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::errors::ScenarioError::Assertion(format!($($arg)+)));
        }
    };
}
