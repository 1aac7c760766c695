use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "sets"])]
pub struct Solver;

/// Items as a bitset over priorities 1..=52
type ItemSet = u64;

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some((item - b'a') as u32 + 1),
        b'A'..=b'Z' => Some((item - b'A') as u32 + 27),
        _ => None,
    }
}

fn item_set(items: &[u8]) -> ItemSet {
    items
        .iter()
        .filter_map(|&b| priority(b))
        .fold(0, |set, p| set | (1 << p))
}

/// Priority of the single item in `set`, if there is exactly one
fn single_priority(set: ItemSet) -> Option<u32> {
    (set.count_ones() == 1).then(|| set.trailing_zeros())
}

fn parse_rucksack(line: &str) -> anyhow::Result<&[u8]> {
    let bytes = line.trim_end().as_bytes();
    if let Some(bad) = bytes.iter().find(|&&b| priority(b).is_none()) {
        return Err(anyhow!("invalid item {:?}", *bad as char));
    }
    if bytes.len() % 2 != 0 {
        return Err(anyhow!("odd number of items ({})", bytes.len()));
    }
    Ok(bytes)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_rucksack)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(idx, sack)| {
                let (left, right) = sack.split_at(sack.len() / 2);
                single_priority(item_set(left) & item_set(right)).ok_or_else(|| {
                    SolveError::failed(format!("rucksack {} has no single shared item", idx + 1))
                })
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::failed(format!(
                "{} rucksacks cannot be split into groups of three",
                shared.len()
            )));
        }
        shared
            .iter()
            .tuples()
            .enumerate()
            .map(|(idx, (a, b, c))| {
                single_priority(item_set(a) & item_set(b) & item_set(c)).ok_or_else(|| {
                    SolveError::failed(format!("group {} has no common badge", idx + 1))
                })
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day03.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "157");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "70");
    }

    #[test]
    fn priorities() {
        assert_eq!(priority(b'a'), Some(1));
        assert_eq!(priority(b'z'), Some(26));
        assert_eq!(priority(b'A'), Some(27));
        assert_eq!(priority(b'Z'), Some(52));
        assert_eq!(priority(b'1'), None);
    }

    #[test]
    fn missing_duplicates_are_errors() {
        let mut shared = Solver::parse("abcd\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());

        let mut shared = Solver::parse("aa\nbb\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());

        let mut shared = Solver::parse("aa\nbb\ncc\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn rejects_malformed_rucksacks() {
        assert!(Solver::parse("abc\n").is_err());
        assert!(Solver::parse("ab1c\n").is_err());
    }
}
