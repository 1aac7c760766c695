use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

/// Inclusive section range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    start: u32,
    end: u32,
}

impl Sections {
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, other: &Sections) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Sections) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn parse_sections(text: &str) -> anyhow::Result<Sections> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, got {text:?}"))?;
    let (start, end) = (start.parse()?, end.parse()?);
    ensure!(start <= end, "range {start}-{end} is reversed");
    Ok(Sections { start, end })
}

fn parse_pair(line: &str) -> anyhow::Result<(Sections, Sections)> {
    let (left, right) = line
        .trim_end()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two comma-separated ranges"))?;
    Ok((parse_sections(left)?, parse_sections(right)?))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_pair)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| a.contains(b) || b.contains(a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| a.overlaps(b)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day04.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn touching_ranges_overlap() {
        let a = Sections::new(5, 7).unwrap();
        let b = Sections::new(7, 9).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.contains(&b));
        assert!(Sections::new(3, 2).is_none());
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(Solver::parse("1-2\n").is_err());
        assert!(Solver::parse("1-2,4\n").is_err());
        assert!(Solver::parse("3-1,4-5\n").is_err());
    }

    fn sections() -> impl Strategy<Value = Sections> {
        (0u32..100, 0u32..100).prop_map(|(a, b)| Sections {
            start: a.min(b),
            end: a.max(b),
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in sections(), b in sections()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn containment_implies_overlap(a in sections(), b in sections()) {
            if a.contains(&b) {
                prop_assert!(a.overlaps(&b));
            }
        }

        #[test]
        fn overlap_matches_shared_section(a in sections(), b in sections()) {
            let shared = (a.start..=a.end).any(|s| (b.start..=b.end).contains(&s));
            prop_assert_eq!(a.overlaps(&b), shared);
        }
    }
}
