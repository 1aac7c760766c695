//! Advent of Code solver framework
//!
//! Each puzzle day is a type that implements [`AocParser`] (input to shared
//! data) and one [`PartSolver<N>`] per part. `#[derive(AocSolver)]` ties the
//! parts together into a [`Solver`], and `#[derive(AutoRegisterSolver)]`
//! submits it to the global plugin list so a [`SolverRegistry`] can find it
//! by `(year, day)`.
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Vec<u32>, ParseError> {
//!         input.lines().map(|l| l.parse().map_err(ParseError::invalid)).collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(shared.windows(4).filter(|w| w[3] > w[0]).count().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! aoc_solver::register_solver!(builder, Depths, 2021, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2021, 1, "199\n200\n208\n210\n200").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "1");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS, RegisterableSolver, SolverFactory, SolverInfo,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder, instantiate,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macros expand to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
