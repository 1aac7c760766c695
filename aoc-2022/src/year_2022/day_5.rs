use std::sync::OnceLock;

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::input::{lines, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "simulation", "regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug)]
pub struct SharedData {
    /// Bottom-to-top crate labels, one entry per numbered stack
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

#[derive(Debug, Clone, Copy)]
enum Crane {
    /// CrateMover 9000: one crate at a time
    Single,
    /// CrateMover 9001: whole run at once, order kept
    Bulk,
}

fn move_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^move (\d+) from (\d+) to (\d+)$").unwrap())
}

fn parse_move(line: &str) -> anyhow::Result<Move> {
    let caps = move_regex()
        .captures(line.trim_end())
        .ok_or_else(|| anyhow!("expected `move N from A to B`, got {line:?}"))?;
    Ok(Move {
        count: caps[1].parse()?,
        from: caps[2].parse()?,
        to: caps[3].parse()?,
    })
}

/// Read the drawing column-wise using the positions of the footer's numbers.
fn parse_drawing(drawing: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let rows: Vec<&[u8]> = lines(drawing).map(str::as_bytes).collect();
    let (footer, crates) = rows
        .split_last()
        .ok_or_else(|| anyhow!("empty stack drawing"))?;

    let mut columns = Vec::new();
    for (pos, &b) in footer.iter().enumerate() {
        if b.is_ascii_digit() && !footer.get(pos + 1).is_some_and(u8::is_ascii_digit) {
            columns.push(pos);
        }
    }
    ensure!(!columns.is_empty(), "stack drawing has no numbered footer");

    let stacks = columns
        .iter()
        .map(|&col| {
            crates
                .iter()
                .rev()
                .filter_map(|row| row.get(col).copied())
                .filter(u8::is_ascii_alphabetic)
                .collect()
        })
        .collect();
    Ok(stacks)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // Leading spaces in the drawing are significant, so split on the
        // first blank line rather than trimming.
        let split = lines(input)
            .position(str::is_empty)
            .ok_or_else(|| ParseError::MissingData("no blank line after stack drawing".into()))?;
        let mut sections = input.splitn(split + 2, '\n');
        let drawing = sections
            .by_ref()
            .take(split)
            .collect::<Vec<_>>()
            .join("\n");
        let procedure = sections.nth(1).unwrap_or_default();

        let stacks = parse_drawing(&drawing).map_err(ParseError::invalid)?;
        let moves = parse_lines(procedure, parse_move)?;
        Ok(SharedData { stacks, moves })
    }
}

fn run(shared: &SharedData, crane: Crane) -> Result<String, SolveError> {
    let mut stacks = shared.stacks.clone();
    for (step, mv) in shared.moves.iter().enumerate() {
        let fail = |reason: &str| {
            SolveError::failed(format!(
                "step {}: move {} from {} to {}: {reason}",
                step + 1,
                mv.count,
                mv.from,
                mv.to
            ))
        };
        if mv.to == 0 || mv.to > stacks.len() {
            return Err(fail("no such destination stack"));
        }
        let source = mv
            .from
            .checked_sub(1)
            .and_then(|idx| stacks.get_mut(idx))
            .ok_or_else(|| fail("no such source stack"))?;
        let remaining = source
            .len()
            .checked_sub(mv.count)
            .ok_or_else(|| fail("not enough crates"))?;
        // Crates put back on the stack they came from end up where they were.
        if mv.from == mv.to {
            continue;
        }
        let mut lifted = source.split_off(remaining);
        if let Crane::Single = crane {
            lifted.reverse();
        }
        stacks[mv.to - 1].extend(lifted);
    }
    Ok(stacks
        .iter()
        .filter_map(|stack| stack.last().map(|&b| b as char))
        .collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        run(shared, Crane::Single)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        run(shared, Crane::Bulk)
    }
}
