use aoc_solver::{
    AocParser, ParseError, RegistrationError, SolveError, Solver, SolverError,
    SolverRegistryBuilder, instantiate,
};

struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Vec<&str>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(input.lines().collect())
    }
}

impl Solver for Lines {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Vec<&str>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => Ok(shared.iter().map(|l| l.len()).max().unwrap_or(0).to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register(2022, 1, Lines::PARTS, &["lines"], |input: &str| {
            instantiate::<Lines>(2022, 1, input)
        })
        .unwrap()
        .build()
}

#[test]
fn creates_and_solves_registered_solver() {
    let registry = registry();
    let mut solver = registry.create_solver(2022, 1, "ab\ncde\nf").unwrap();

    assert_eq!(solver.year(), 2022);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let first = solver.solve(1).unwrap();
    assert_eq!(first.answer, "3");
    assert!(first.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn out_of_range_part_through_dyn_solver() {
    let registry = registry();
    let mut solver = registry.create_solver(2022, 1, "x").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn missing_and_invalid_lookups() {
    let registry = registry();
    assert!(matches!(
        registry.create_solver(2022, 2, "x"),
        Err(SolverError::NotFound(2022, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, "x"),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
    assert!(matches!(
        registry.create_solver(2022, 1, ""),
        Err(SolverError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn duplicate_and_out_of_calendar_registrations_fail() {
    let builder = SolverRegistryBuilder::new()
        .register(2022, 1, 2, &[], |input: &str| instantiate::<Lines>(2022, 1, input))
        .unwrap();
    let duplicate = builder.register(2022, 1, 2, &[], |input: &str| {
        instantiate::<Lines>(2022, 1, input)
    });
    assert!(matches!(
        duplicate,
        Err(RegistrationError::DuplicateSolver(2022, 1))
    ));

    let invalid = SolverRegistryBuilder::new().register(2022, 26, 2, &[], |input: &str| {
        instantiate::<Lines>(2022, 26, input)
    });
    assert!(matches!(
        invalid,
        Err(RegistrationError::InvalidYearDay(2022, 26))
    ));
}

#[test]
fn info_is_ordered_and_carries_tags() {
    let registry = SolverRegistryBuilder::new()
        .register(2022, 13, 2, &[], |input: &str| instantiate::<Lines>(2022, 13, input))
        .unwrap()
        .register(2016, 4, 1, &["old"], |input: &str| instantiate::<Lines>(2016, 4, input))
        .unwrap()
        .build();

    let keys: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2016, 4), (2022, 13)]);
    assert_eq!(registry.get_info(2016, 4).unwrap().tags, &["old"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}
