//! Error types for the solver library

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle relies on is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Anything else
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Wrap any displayable error as [`ParseError::InvalidFormat`]
    pub fn invalid(err: impl std::fmt::Display) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Error raised while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part exists in range but has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part is 0 or above the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The computation itself failed (e.g. no answer exists for this input)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Build a [`SolveError::SolveFailed`] from a plain message
    pub fn failed(message: impl Into<String>) -> Self {
        Self::SolveFailed(message.into().into())
    }
}

/// Error returned by registry lookups and solver execution
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported calendar
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver already exists for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported calendar
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
