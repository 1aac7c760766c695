use std::collections::HashSet;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{DOWN, LEFT, Offset, RIGHT, UP};
use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    dir: Offset,
    steps: u32,
}

fn parse_motion(line: &str) -> anyhow::Result<Motion> {
    let (dir, steps) = line
        .trim_end()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<dir> <steps>`, got {line:?}"))?;
    let dir = match dir {
        "L" => LEFT,
        "R" => RIGHT,
        "U" => UP,
        "D" => DOWN,
        other => bail!("unknown direction {other:?}"),
    };
    Ok(Motion {
        dir,
        steps: steps.parse()?,
    })
}

/// Move `knot` one step toward `leader` unless they already touch.
fn follow(knot: &mut Offset, leader: Offset) {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() > 1 || dy.abs() > 1 {
        knot.0 += dx.signum();
        knot.1 += dy.signum();
    }
}

/// Positions visited by the last of `knots` knots, all starting at the origin
pub fn tail_visits(motions: &[Motion], knots: usize) -> HashSet<Offset> {
    let mut rope = vec![(0isize, 0isize); knots.max(1)];
    let mut visited = HashSet::from([(0, 0)]);
    for motion in motions {
        for _ in 0..motion.steps {
            rope[0].0 += motion.dir.0;
            rope[0].1 += motion.dir.1;
            for i in 1..rope.len() {
                let leader = rope[i - 1];
                follow(&mut rope[i], leader);
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_motion)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).len().to_string())
    }
}
