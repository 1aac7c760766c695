use std::slice;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["2022", "simulation", "render"])]
pub struct Solver;

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    Addx(i64),
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("noop"), None, None) => Ok(Instruction::Noop),
        (Some("addx"), Some(value), None) => Ok(Instruction::Addx(
            value
                .parse()
                .map_err(|e| anyhow!("bad addx operand {value:?}: {e}"))?,
        )),
        _ => bail!("unknown instruction {line:?}"),
    }
}

/// Yields `(cycle, x)` for every clock cycle, with `x` as seen *during* the
/// cycle.
#[derive(Debug, Clone)]
pub struct Cpu<'a> {
    program: slice::Iter<'a, Instruction>,
    cycle: usize,
    x: i64,
    /// Cycles left on the current instruction and its effect on `x`
    pending: Option<(u8, i64)>,
}

impl<'a> Cpu<'a> {
    pub fn new(program: &'a [Instruction]) -> Self {
        Self {
            program: program.iter(),
            cycle: 0,
            x: 1,
            pending: None,
        }
    }

    /// Register value after everything executed so far
    pub fn x(&self) -> i64 {
        self.x
    }
}

impl Iterator for Cpu<'_> {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let (remaining, delta) = match self.pending.take() {
            Some(pending) => pending,
            None => match self.program.next()? {
                Instruction::Noop => (1, 0),
                Instruction::Addx(v) => (2, *v),
            },
        };
        self.cycle += 1;
        let state = (self.cycle, self.x);
        if remaining > 1 {
            self.pending = Some((remaining - 1, delta));
        } else {
            self.x += delta;
        }
        Some(state)
    }
}

pub fn render(program: &[Instruction]) -> String {
    Cpu::new(program)
        .take(SCREEN_WIDTH * SCREEN_HEIGHT)
        .map(|(cycle, x)| {
            let column = ((cycle - 1) % SCREEN_WIDTH) as i64;
            if (x - column).abs() <= 1 { '#' } else { '.' }
        })
        .chunks(SCREEN_WIDTH)
        .into_iter()
        .map(|row| row.collect::<String>())
        .join("\n")
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_instruction)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strength: i64 = Cpu::new(shared)
            .filter(|&(cycle, _)| cycle % 40 == 20)
            .take_while(|&(cycle, _)| cycle <= 220)
            .map(|(cycle, x)| cycle as i64 * x)
            .sum();
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(render(shared))
    }
}
