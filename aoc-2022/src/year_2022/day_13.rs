use std::cmp::Ordering;
use std::fmt;

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use serde::Deserialize;

use crate::utils::input::{blocks, lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["2022", "sorting", "json"])]
pub struct Solver;

/// A distress signal packet: an integer or a nested list
///
/// Equality follows the packet ordering, so `3 == [3]`. Use
/// [`Packet::same_shape`] to tell such packets apart.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Packet {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.trim())
    }

    /// Structural equality: same nesting and same integers
    pub fn same_shape(&self, other: &Packet) -> bool {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a == b,
            (Packet::List(a), Packet::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.iter().cmp(b.iter()),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)].iter().cmp(b.iter()),
            (Packet::List(a), Packet::Int(b)) => a.iter().cmp([Packet::Int(*b)].iter()),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Int(v) => write!(f, "{v}"),
            Packet::List(items) => write!(f, "[{}]", items.iter().join(",")),
        }
    }
}

/// Stable top-down merge sort
pub fn merge_sort<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items);
    let right = merge_sort(right);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left to keep equal elements in input order.
        let next = if r < l { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

fn parse_pair(block: &str) -> anyhow::Result<(Packet, Packet)> {
    let packets: Vec<&str> = lines(block).filter(|l| !l.is_empty()).collect();
    ensure!(packets.len() == 2, "expected 2 packets, found {}", packets.len());
    Ok((Packet::parse(packets[0])?, Packet::parse(packets[1])?))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Packet, Packet)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        blocks(input)
            .enumerate()
            .map(|(idx, block)| parse_pair(block).map_err(|e| anyhow!("(pair {}) {}", idx + 1, e)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(ParseError::invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = shared
            .iter()
            .enumerate()
            .filter(|(_, (left, right))| left < right)
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dividers = [
            Packet::List(vec![Packet::List(vec![Packet::Int(2)])]),
            Packet::List(vec![Packet::List(vec![Packet::Int(6)])]),
        ];
        let packets = shared
            .iter()
            .flat_map(|(left, right)| [left.clone(), right.clone()])
            .chain(dividers.iter().cloned())
            .collect();
        let sorted = merge_sort(packets);

        dividers
            .iter()
            .map(|divider| {
                sorted
                    .iter()
                    .position(|p| p.same_shape(divider))
                    .map(|idx| idx + 1)
                    .ok_or_else(|| SolveError::failed(format!("divider {divider} lost while sorting")))
            })
            .product::<Result<usize, _>>()
            .map(|key| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day13.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "140");
    }

    #[test]
    fn pair_order() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let ordered: Vec<bool> = shared.iter().map(|(l, r)| l < r).collect();
        assert_eq!(
            ordered,
            vec![true, true, false, true, false, true, false, false]
        );
    }

    #[test]
    fn sorted_packets() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let packets = shared
            .into_iter()
            .flat_map(|(l, r)| [l, r])
            .collect::<Vec<_>>();
        let sorted: Vec<String> = merge_sort(packets).iter().map(Packet::to_string).collect();
        assert_eq!(
            sorted,
            vec![
                "[]",
                "[[]]",
                "[[[]]]",
                "[1,1,3,1,1]",
                "[1,1,5,1,1]",
                "[[1],[2,3,4]]",
                "[1,[2,[3,[4,[5,6,0]]]],8,9]",
                "[1,[2,[3,[4,[5,6,7]]]],8,9]",
                "[[1],4]",
                "[3]",
                "[[4,4],4,4]",
                "[[4,4],4,4,4]",
                "[7,7,7]",
                "[7,7,7,7]",
                "[[8,7,6]]",
                "[9]",
            ]
        );
    }

    #[test]
    fn mixed_types_promote_integers() {
        let int = Packet::parse("3").unwrap();
        let list = Packet::parse("[3]").unwrap();
        assert_eq!(int.cmp(&list), Ordering::Equal);
        assert!(Packet::parse("[[1],[2,3,4]]").unwrap() < Packet::parse("[[1],4]").unwrap());
    }

    #[test]
    fn dividers_are_found_by_shape() {
        let mut shared = Solver::parse("[2]\n[6]\n").unwrap();
        // Sorted: [2], [[2]], [6], [[6]], with [2] == [[2]] under the ordering.
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "8");
        assert_eq!(Packet::parse("[2]").unwrap(), Packet::parse("[[2]]").unwrap());
        assert!(!Packet::parse("[2]").unwrap().same_shape(&Packet::parse("[[2]]").unwrap()));
    }

    #[test]
    fn merge_sort_is_stable() {
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let keyed: Vec<_> = items.iter().map(|&(k, v)| Keyed(k, v)).collect();
        let sorted: Vec<char> = merge_sort(keyed).into_iter().map(|k| k.1).collect();
        assert_eq!(sorted, vec!['b', 'd', 'a', 'c']);
    }

    /// Orders by the key only
    #[derive(Debug, Eq)]
    struct Keyed(u8, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn rejects_bad_packets() {
        assert!(Solver::parse("[1,2]\n").is_err());
        assert!(Solver::parse("[1,2]\n[a]\n").is_err());
        assert!(Solver::parse("[1,2]\n[3]\n[4]\n").is_err());
    }

    fn packet() -> impl Strategy<Value = Packet> {
        let leaf = (0u32..10).prop_map(Packet::Int);
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Packet::List)
        })
    }

    proptest! {
        #[test]
        fn comparator_is_antisymmetric(a in packet(), b in packet()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn display_parses_back(p in packet()) {
            prop_assert!(Packet::parse(&p.to_string()).unwrap().same_shape(&p));
        }

        #[test]
        fn merge_sort_matches_std(items in prop::collection::vec(packet(), 0..12)) {
            let mut expected = items.clone();
            expected.sort();
            let render = |packets: Vec<Packet>| packets.iter().map(Packet::to_string).collect::<Vec<_>>();
            prop_assert_eq!(render(merge_sort(items)), render(expected));
        }
    }
}
