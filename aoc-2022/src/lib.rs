//! Advent of Code 2022 solutions, days 1 through 13
//!
//! Every day derives `AutoRegisterSolver`, so linking this crate is enough
//! for `SolverRegistryBuilder::register_all_plugins` to find them.

pub mod utils;
pub mod year_2022;
