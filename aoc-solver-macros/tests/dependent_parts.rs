use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(Debug, Clone)]
struct Inventory {
    weights: Vec<u32>,
    sorted: Option<Vec<u32>>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Heaviest;

impl AocParser for Heaviest {
    type SharedData<'a> = Inventory;

    fn parse(input: &str) -> Result<Inventory, ParseError> {
        let weights = input
            .lines()
            .map(|line| line.trim().parse::<u32>().map_err(ParseError::invalid))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Inventory {
            weights,
            sorted: None,
        })
    }
}

fn sorted(shared: &mut Inventory) -> &[u32] {
    shared.sorted.get_or_insert_with(|| {
        let mut weights = shared.weights.clone();
        weights.sort_unstable_by(|a, b| b.cmp(a));
        weights
    })
}

impl PartSolver<1> for Heaviest {
    fn solve(shared: &mut Inventory) -> Result<String, SolveError> {
        sorted(shared)
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("empty inventory"))
    }
}

impl PartSolver<2> for Heaviest {
    fn solve(shared: &mut Inventory) -> Result<String, SolveError> {
        Ok(sorted(shared).iter().take(3).sum::<u32>().to_string())
    }
}

impl PartSolver<3> for Heaviest {
    fn solve(_shared: &mut Inventory) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(3))
    }
}

#[test]
fn parts_count_matches_attribute() {
    assert_eq!(<Heaviest as Solver>::PARTS, 3);
}

#[test]
fn first_part_caches_sorted_weights() {
    let mut shared = Heaviest::parse("4\n9\n1\n7").unwrap();
    assert!(shared.sorted.is_none());

    assert_eq!(Heaviest::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(shared.sorted.as_deref(), Some(&[9, 7, 4, 1][..]));
}

#[test]
fn second_part_reuses_or_rebuilds_cache() {
    let mut fresh = Heaviest::parse("4\n9\n1\n7").unwrap();
    assert_eq!(Heaviest::solve_part(&mut fresh, 2).unwrap(), "20");

    let mut warm = Heaviest::parse("4\n9\n1\n7").unwrap();
    Heaviest::solve_part(&mut warm, 1).unwrap();
    assert_eq!(Heaviest::solve_part(&mut warm, 2).unwrap(), "20");
}

#[test]
fn errors_from_parts_propagate() {
    let mut empty = Heaviest::parse("").unwrap();
    assert!(matches!(
        Heaviest::solve_part(&mut empty, 1),
        Err(SolveError::SolveFailed(_))
    ));

    let mut shared = Heaviest::parse("1").unwrap();
    assert!(matches!(
        Heaviest::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn out_of_range_parts_are_rejected() {
    let mut shared = Heaviest::parse("1").unwrap();
    assert!(matches!(
        Heaviest::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
    assert!(matches!(
        Heaviest::solve_part_checked_range(&mut shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn parse_errors_surface() {
    assert!(matches!(
        Heaviest::parse("12\nheavy"),
        Err(ParseError::InvalidFormat(_))
    ));
}
