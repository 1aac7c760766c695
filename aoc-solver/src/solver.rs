//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on.
///
/// `SharedData` is generic over the input lifetime so a solver can either own
/// its parsed form or borrow slices of the input directly.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split("\n\n")
///             .map(|elf| {
///                 elf.lines()
///                     .map(|l| l.parse::<u32>().map_err(ParseError::invalid))
///                     .sum::<Result<u32, _>>()
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Calories::parse("1\n2\n\n4").unwrap(), vec![3, 4]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to share.
    type SharedData<'a>;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one trait per part lets the compiler check that every part
/// the dispatcher references exists.
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for this part.
    ///
    /// Shared data is mutable so a part may stash work for a later one, but
    /// each part must still produce a correct answer when run on its own.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch over a solver's parts.
///
/// Usually generated by `#[derive(AocSolver)]`, which forwards part `k` to
/// `PartSolver<k>`.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Twice;
///
/// impl AocParser for Twice {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<&str, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Twice {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut &str, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.repeat(2)),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Twice::parse(" ab ").unwrap();
/// assert_eq!(Twice::solve_part(&mut shared, 1).unwrap(), "abab");
/// ```
pub trait Solver: AocParser {
    /// Number of parts, numbered from 1
    const PARTS: u8;

    /// Solve `part` against the shared data.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked entry point layered over [`Solver`]
pub trait SolverExt: Solver {
    /// Reject parts outside `1..=PARTS` before calling [`Solver::solve_part`].
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
