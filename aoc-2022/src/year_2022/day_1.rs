use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::{blocks, lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["2022", "grouping"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    totals: Vec<u64>,
    sorted: bool,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let totals = blocks(input)
            .enumerate()
            .map(|(elf, block)| {
                lines(block)
                    .map(|line| line.trim().parse::<u64>())
                    .sum::<Result<u64, _>>()
                    .map_err(|e| anyhow!("(elf {}) {}", elf + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(ParseError::invalid)?;

        if totals.is_empty() {
            return Err(ParseError::MissingData("no elves in input".into()));
        }

        Ok(SharedData {
            totals,
            sorted: false,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_totals(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_totals(shared, 3).to_string())
    }
}

/// Sum of the `n` largest totals; fewer elves than `n` sums them all.
fn top_totals(shared: &mut SharedData, n: usize) -> u64 {
    if !shared.sorted {
        shared.totals.sort_unstable_by(|a, b| b.cmp(a));
        shared.sorted = true;
    }
    shared.totals.iter().take(n).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day01.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.totals, vec![6000, 4000, 11000, 24000, 10000]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "24000");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45000");
    }

    #[test]
    fn part_two_alone() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45000");
    }

    #[test]
    fn fewer_than_three_elves() {
        let mut shared = Solver::parse("5\n\n7\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Solver::parse("1\n\nx\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("elf 2")
        ));
        assert!(matches!(Solver::parse("\n\n"), Err(ParseError::MissingData(_))));
    }
}
