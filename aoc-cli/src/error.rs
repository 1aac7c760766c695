//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor failure (Arc-wrapped so it can be cloned cheaply)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Failures of the executor itself, as opposed to per-part solve errors,
/// which are reported in the results.
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// The receiving side of the result channel went away
    #[error("Result channel closed")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Errors collected from parallel branches
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side that
    /// already is one.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let flatten = |err: ArcExecutorError| match err.inner() {
            ExecutorError::Multiple(errors) => errors.clone(),
            _ => vec![err],
        };
        let mut errors = flatten(first);
        errors.extend(flatten(second));
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum PartError {
    #[error("no input file at {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("{0}")]
    Unreadable(String),

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
