use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::input::lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["2022", "grid", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Elevations, `0` for `a` through `25` for `z`
    heights: Grid<u8>,
    start: (usize, usize),
    end: (usize, usize),
    /// Steps from each cell to `end`, filled on first use
    distances: Option<Grid<Option<u32>>>,
}

fn elevation(b: u8) -> Option<u8> {
    match b {
        b'S' => Some(0),
        b'E' => Some(b'z' - b'a'),
        b'a'..=b'z' => Some(b - b'a'),
        _ => None,
    }
}

/// BFS outward from `end` along reversed edges: a step from `from` to `to`
/// is allowed when `to` is at most one level higher than `from`.
fn distances_to_end(heights: &Grid<u8>, end: (usize, usize)) -> Grid<Option<u32>> {
    let mut dist = Grid::filled(heights.width(), heights.height(), None);
    let mut queue = VecDeque::from([(end, 0u32)]);
    dist[end] = Some(0);
    while let Some((pos, steps)) = queue.pop_front() {
        for prev in heights.neighbours(pos) {
            if dist[prev].is_none() && heights[pos] <= heights[prev] + 1 {
                dist[prev] = Some(steps + 1);
                queue.push_back((prev, steps + 1));
            }
        }
    }
    dist
}

/// Heights alongside the cached distance map
fn with_distances(shared: &mut SharedData) -> (&Grid<u8>, &Grid<Option<u32>>) {
    let SharedData {
        heights,
        end,
        distances,
        ..
    } = shared;
    let dist = distances.get_or_insert_with(|| distances_to_end(heights, *end));
    (heights, dist)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::from_rows(
            lines(input)
                .filter(|l| !l.is_empty())
                .map(|l| l.bytes().collect::<Vec<_>>()),
        )
        .ok_or_else(|| ParseError::InvalidFormat("height map is empty or ragged".into()))?;

        if let Some(pos) = raw.find(|&b| elevation(b).is_none()) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected {:?} at {pos:?}",
                raw[pos] as char
            )));
        }
        let start = raw
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("no start marker `S`".into()))?;
        let end = raw
            .find(|&b| b == b'E')
            .ok_or_else(|| ParseError::MissingData("no end marker `E`".into()))?;

        let heights = raw.map(|&b| elevation(b).unwrap_or_default());

        Ok(SharedData {
            heights,
            start,
            end,
            distances: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        let (_, dist) = with_distances(shared);
        dist[start]
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("no path from S to E"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (heights, dist) = with_distances(shared);
        heights
            .positions()
            .filter(|&pos| heights[pos] == 0)
            .filter_map(|pos| dist[pos])
            .min()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("no lowest square reaches E"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day12.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.start, (0, 0));
        assert_eq!(shared.end, (5, 2));
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "31");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn part_two_alone() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn descending_any_amount() {
        let mut shared = Solver::parse("SbcdefghijklmnopqrstuvwxyzyE\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "27");
    }

    #[test]
    fn unreachable_end_fails() {
        let mut shared = Solver::parse("SaxE\n").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn rejects_bad_maps() {
        assert!(matches!(Solver::parse("aaE\n"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("Saa\n"), Err(ParseError::MissingData(_))));
        assert!(Solver::parse("S1E\n").is_err());
        assert!(Solver::parse("SaE\naa\n").is_err());
    }
}
