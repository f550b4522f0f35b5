//! Error types shared by the problem model, the solvers and the
//! experiment harness.

/// Errors returned when a problem, configuration or request is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("InvalidProblem: {0}")]
    InvalidProblem(String),
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("UnknownAlgorithm: name={0}")]
    UnknownAlgorithm(String),
    #[error("UnknownScenario: id={0}")]
    UnknownScenario(String),
}

impl Error {
    pub(crate) fn invalid_problem(reason: impl Into<String>) -> Self {
        Self::InvalidProblem(reason.into())
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
