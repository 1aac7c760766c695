use std::sync::OnceLock;

use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

use crate::utils::input::blocks;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["2022", "simulation", "regex", "modular"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Old,
    Value(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    /// New worry level, or `None` if it does not fit in a `u64`
    fn apply(self, old: u64) -> Option<u64> {
        let rhs = match self {
            Operation::Add(Operand::Old) | Operation::Mul(Operand::Old) => old,
            Operation::Add(Operand::Value(v)) | Operation::Mul(Operand::Value(v)) => v,
        };
        match self {
            Operation::Add(_) => old.checked_add(rhs),
            Operation::Mul(_) => old.checked_mul(rhs),
        }
    }

    /// New worry level reduced modulo `modulus`
    fn apply_mod(self, old: u64, modulus: u64) -> u64 {
        let m = modulus as u128;
        let old = old as u128 % m;
        let rhs = match self {
            Operation::Add(Operand::Old) | Operation::Mul(Operand::Old) => old,
            Operation::Add(Operand::Value(v)) | Operation::Mul(Operand::Value(v)) => {
                v as u128 % m
            }
        };
        let new = match self {
            Operation::Add(_) => old + rhs,
            Operation::Mul(_) => old * rhs,
        };
        (new % m) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

#[derive(Debug, Clone, Copy)]
enum Relief {
    DivideByThree,
    Modulo(u64),
}

fn monkey_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^Monkey (\d+):\s*",
            r"Starting items:([\d, ]*)\s*",
            r"Operation: new = old (\S+) (old|\d+)\s*",
            r"Test: divisible by (\d+)\s*",
            r"If true: throw to monkey (\d+)\s*",
            r"If false: throw to monkey (\d+)\s*$",
        ))
        .unwrap()
    })
}

fn parse_monkey(block: &str, expected_id: usize) -> anyhow::Result<Monkey> {
    let caps = monkey_regex()
        .captures(block)
        .ok_or_else(|| anyhow!("block does not describe a monkey"))?;

    let id: usize = caps[1].parse()?;
    ensure!(id == expected_id, "expected monkey {expected_id}, found {id}");

    let items = caps[2]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()?;

    let operand = match &caps[4] {
        "old" => Operand::Old,
        value => Operand::Value(value.parse()?),
    };
    let operation = match &caps[3] {
        "+" => Operation::Add(operand),
        "*" => Operation::Mul(operand),
        other => bail!("unsupported operator {other:?}"),
    };

    let divisor: u64 = caps[5].parse()?;
    ensure!(divisor > 0, "divisor must be positive");

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true: caps[6].parse()?,
        if_false: caps[7].parse()?,
    })
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

/// Product of the two highest inspection counts after `rounds` rounds
fn monkey_business(
    monkeys: &[Monkey],
    rounds: usize,
    relief: Relief,
) -> Result<u64, SolveError> {
    let mut monkeys = monkeys.to_vec();
    let mut inspections = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for id in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[id].items);
            inspections[id] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[id];
            for item in items {
                let worry = match relief {
                    Relief::DivideByThree => {
                        operation.apply(item).ok_or_else(|| {
                            SolveError::failed(format!(
                                "monkey {id}: worry level {item} overflows under {operation:?}"
                            ))
                        })? / 3
                    }
                    Relief::Modulo(m) => operation.apply_mod(item, m),
                };
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }
    Ok(inspections.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(2).product())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let monkeys = blocks(input)
            .enumerate()
            .map(|(id, block)| {
                parse_monkey(block, id).map_err(|e| anyhow!("(monkey {}) {}", id, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(ParseError::invalid)?;

        if monkeys.is_empty() {
            return Err(ParseError::MissingData("no monkeys in input".into()));
        }
        for (id, monkey) in monkeys.iter().enumerate() {
            for target in [monkey.if_true, monkey.if_false] {
                if target >= monkeys.len() {
                    return Err(ParseError::InvalidFormat(format!(
                        "(monkey {id}) cannot throw to monkey {target}"
                    )));
                }
            }
        }
        Ok(monkeys)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        monkey_business(shared, 20, Relief::DivideByThree).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let modulus = shared
            .iter()
            .try_fold(1, |acc, m| lcm(acc, m.divisor))
            .ok_or_else(|| SolveError::failed("lcm of the divisors does not fit in a u64"))?;
        tracing::debug!(modulus, "worry modulus");
        monkey_business(shared, 10_000, Relief::Modulo(modulus)).map(|n| n.to_string())
    }
}
