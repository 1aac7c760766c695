use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{CARDINALS, Grid};
use crate::utils::input::lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

fn is_visible(grid: &Grid<u8>, pos: (usize, usize)) -> bool {
    let height = grid[pos];
    CARDINALS
        .into_iter()
        .any(|dir| grid.ray(pos, dir).all(|&tree| tree < height))
}

/// Product of viewing distances in the four directions; edge trees score 0.
pub fn scenic_score(grid: &Grid<u8>, pos: (usize, usize)) -> usize {
    let height = grid[pos];
    CARDINALS
        .into_iter()
        .map(|dir| {
            let mut seen = 0;
            for &tree in grid.ray(pos, dir) {
                seen += 1;
                if tree >= height {
                    break;
                }
            }
            seen
        })
        .product()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = lines(input)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.bytes()
                    .map(|b| {
                        b.is_ascii_digit().then(|| b - b'0').ok_or_else(|| {
                            ParseError::InvalidFormat(format!(
                                "(line {}) {:?} is not a tree height",
                                y + 1,
                                b as char
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
            .ok_or_else(|| ParseError::InvalidFormat("tree map is empty or ragged".into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visible = shared
            .positions()
            .filter(|&pos| is_visible(shared, pos))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .positions()
            .map(|pos| scenic_score(shared, pos))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day08.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "8");
    }

    #[test]
    fn scenic_scores() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(scenic_score(&grid, (2, 1)), 4);
        assert_eq!(scenic_score(&grid, (2, 3)), 8);
        assert_eq!(scenic_score(&grid, (0, 2)), 0);
    }

    #[test]
    fn single_tree_is_visible() {
        let mut shared = Solver::parse("7\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn rejects_bad_maps() {
        assert!(Solver::parse("12\n3\n").is_err());
        assert!(Solver::parse("1a\n").is_err());
        assert!(Solver::parse("").is_err());
    }
}
