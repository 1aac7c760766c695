//! Solver registry: flat (year, day) storage of solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the storage covers (2015-2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if !(BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year) {
        return None;
    }
    if !(1..=DAYS_PER_YEAR as u8).contains(&day) {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    (
        BASE_YEAR + (index / DAYS_PER_YEAR) as u16,
        (index % DAYS_PER_YEAR) as u8 + 1,
    )
}

/// Builds a parsed, type-erased solver from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Parse `input` with `S` and erase the concrete type.
pub fn instantiate<'a, S>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    let instance = SolverInstance::<S>::new(year, day, input)?;
    let boxed: Box<dyn DynSolver + 'a> = Box::new(instance);
    Ok(boxed)
}

/// Collects solver factories, then freezes them into a [`SolverRegistry`].
///
/// ```
/// use aoc_solver::SolverRegistryBuilder;
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver_plugins(|plugin| plugin.year == 2022)
///     .unwrap()
///     .build();
/// assert!(registry.get_info(2015, 1).is_none());
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for `year`/`day`.
    ///
    /// Fails if the slot is taken or the date is outside the calendar.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let slot = &mut self.entries[index];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *slot = Some(Entry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```ignore
    /// let easy = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table of solver factories.
///
/// Safe to share between threads: factories are `Send + Sync` and each call
/// to [`SolverRegistry::create_solver`] yields an independent instance.
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for every registered solver, ordered by (year, day)
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(index);
                SolverInfo {
                    year,
                    day,
                    parts: e.parts,
                    tags: e.tags,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        let entry = self.entries.get(calc_index(year, day)?)?.as_ref()?;
        Some(SolverInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-erased hook letting a solver type add itself to a builder.
///
/// Blanket-implemented for every [`Solver`], so plugin entries can hold a
/// `&'static dyn RegisterableSolver` without naming associated types.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, tags, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic discovery.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; hand-written
/// submissions look like this:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     aoc_solver::SolverPlugin {
///         year: 2022,
///         day: 1,
///         solver: &Day1,
///         tags: &["2022"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering, e.g. `"bfs"` or `"simulation"`
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register `$solver` on a mutable builder binding, panicking on conflicts.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder, register_solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<&str, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut &str, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, Echo, 2022, 25);
/// let registry = builder.build();
///
/// let mut solver = registry.create_solver(2022, 25, "hi").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                &[],
                |input: &str| $crate::instantiate::<$solver>($year, $day, input),
            )
            .expect("Failed to register solver");
    };
}
