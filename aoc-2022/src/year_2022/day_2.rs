use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "scoring"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Shape {
    const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    fn score(self) -> u32 {
        self as u32 + 1
    }

    /// Outcome of playing `self` against `opponent`
    fn against(self, opponent: Shape) -> Outcome {
        match (self as u8 + 3 - opponent as u8) % 3 {
            0 => Outcome::Draw,
            1 => Outcome::Win,
            _ => Outcome::Loss,
        }
    }

    /// Shape to play against `self` to reach `outcome`
    fn for_outcome(self, outcome: Outcome) -> Shape {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.against(self) == outcome)
            .unwrap_or(self)
    }
}

impl Outcome {
    fn score(self) -> u32 {
        self as u32 * 3
    }
}

/// One strategy guide row: the opponent's shape and the raw second column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: Shape,
    column: u8,
}

fn parse_round(line: &str) -> anyhow::Result<Round> {
    let (left, right) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected two columns, got {line:?}"))?;
    let opponent = match left {
        "A" => Shape::Rock,
        "B" => Shape::Paper,
        "C" => Shape::Scissors,
        other => bail!("unknown opponent move {other:?}"),
    };
    let column = match right.trim() {
        "X" => 0,
        "Y" => 1,
        "Z" => 2,
        other => bail!("unknown response {other:?}"),
    };
    Ok(Round { opponent, column })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_round)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|round| {
                let me = Shape::ALL[round.column as usize];
                me.score() + me.against(round.opponent).score()
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        const OUTCOMES: [Outcome; 3] = [Outcome::Loss, Outcome::Draw, Outcome::Win];
        let total: u32 = shared
            .iter()
            .map(|round| {
                let outcome = OUTCOMES[round.column as usize];
                round.opponent.for_outcome(outcome).score() + outcome.score()
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day02.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "15");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn shape_cycle() {
        assert_eq!(Shape::Paper.against(Shape::Rock), Outcome::Win);
        assert_eq!(Shape::Rock.against(Shape::Paper), Outcome::Loss);
        assert_eq!(Shape::Scissors.against(Shape::Scissors), Outcome::Draw);
        assert_eq!(Shape::Rock.for_outcome(Outcome::Loss), Shape::Scissors);
        assert_eq!(Shape::Scissors.for_outcome(Outcome::Win), Shape::Rock);
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(Solver::parse("A Y\nD X\n").is_err());
        assert!(Solver::parse("A W\n").is_err());
        assert!(Solver::parse("AY\n").is_err());
    }
}
