use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "sliding-window"])]
pub struct Solver;

/// Number of characters read when the first `window` distinct characters in
/// a row have been seen.
pub fn find_marker(signal: &[u8], window: usize) -> Option<usize> {
    if window == 0 || window > signal.len() {
        return None;
    }
    let mut counts = [0u16; 256];
    let mut distinct = 0;
    for (idx, &b) in signal.iter().enumerate() {
        counts[b as usize] += 1;
        if counts[b as usize] == 1 {
            distinct += 1;
        }
        if idx >= window {
            let out = signal[idx - window] as usize;
            counts[out] -= 1;
            if counts[out] == 0 {
                distinct -= 1;
            }
        }
        if distinct == window {
            return Some(idx + 1);
        }
    }
    None
}

fn solve_for(signal: &[u8], window: usize) -> Result<String, SolveError> {
    find_marker(signal, window)
        .map(|end| end.to_string())
        .ok_or_else(|| SolveError::failed(format!("no {window}-character marker in signal")))
}

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let signal = input.trim();
        if signal.is_empty() {
            return Err(ParseError::MissingData("empty signal".into()));
        }
        Ok(signal.as_bytes())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(*shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(*shared, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../tests/fixtures/2022/day06.txt");

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "19");
    }

    #[test]
    fn other_signals() {
        let cases = [
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];
        for (signal, packet, message) in cases {
            assert_eq!(find_marker(signal.as_bytes(), 4), Some(packet), "{signal}");
            assert_eq!(find_marker(signal.as_bytes(), 14), Some(message), "{signal}");
        }
    }

    #[test]
    fn missing_marker_fails() {
        assert_eq!(find_marker(b"ffaaiill", 4), None);
        assert_eq!(find_marker(b"abc", 4), None);
        let mut shared = Solver::parse("ffaaiill\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
