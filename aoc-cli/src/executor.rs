//! Runs solvers on a rayon pool and streams per-part results

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, PartError};
use crate::fixtures::FixtureStore;
use aoc_solver::{DynSolver, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Outcome of one part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PartError>,
    /// `None` when parsing never happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: PartError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// One registered puzzle and the parts to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// State every worker reads
struct ExecutorContext {
    registry: SolverRegistry,
    fixtures: FixtureStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

pub struct Executor {
    context: ExecutorContext,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutorContext {
                registry,
                fixtures: FixtureStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.context.fixtures
    }

    /// Registered puzzles that pass the year, day and part filters, in
    /// (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .filter_map(|info| {
                let parts = filter_parts(ctx.part_filter, info.parts)?;
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts,
                })
            })
            .collect()
    }

    /// Run every work item, sending one result per part to `tx`.
    ///
    /// Solve failures travel inside the results; only executor failures are
    /// returned here.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let ctx = &self.context;
        tracing::info!(
            items = work_items.len(),
            mode = ?ctx.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "starting run"
        );

        match ctx.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .map(|work| run_work(work, &tx, ctx).err())
                .fold(None, combine_errors)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.thread_pool.install(|| {
                    by_year
                        .into_par_iter()
                        .map(|items| {
                            items
                                .iter()
                                .map(|work| run_work(work, &tx, ctx).err())
                                .fold(None, combine_errors)
                        })
                        .reduce(|| None, combine_errors)
                        .map_or(Ok(()), Err)
                })
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| run_work(work, &tx, ctx).err())
                    .reduce(|| None, combine_errors)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

fn combine_errors(
    acc: Option<ArcExecutorError>,
    next: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (acc, next) {
        (acc, None) => acc,
        (acc, Some(next)) => Some(ArcExecutorError::combine_opt(acc, next)),
    }
}

/// Parts to run for a solver with `max_parts` parts, or `None` if the filter
/// excludes all of them
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> Option<RangeInclusive<u8>> {
    match part_filter {
        Some(p) if (1..=max_parts).contains(&p) => Some(p..=p),
        Some(_) => None,
        None if max_parts > 0 => Some(1..=max_parts),
        None => None,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &ExecutorContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match ctx.fixtures.get(year, day) {
        Ok(Some(input)) => input,
        Ok(None) => {
            let path = ctx.fixtures.path(year, day);
            tracing::warn!(year, day, path = %path.display(), "input file missing");
            for part in work.parts.clone() {
                let error = PartError::MissingInput { path: path.clone() };
                send(tx, SolverResult::failed(year, day, part, error))?;
            }
            return Ok(());
        }
        Err(e) => {
            tracing::warn!(year, day, error = %e, "input file unreadable");
            for part in work.parts.clone() {
                let error = PartError::Unreadable(e.to_string());
                send(tx, SolverResult::failed(year, day, part, error))?;
            }
            return Ok(());
        }
    };

    if ctx.parallelize_by == ParallelizeBy::Part {
        work.parts.clone().into_par_iter().try_for_each_with(
            tx.clone(),
            |tx, part| {
                let result = match ctx.registry.create_solver(year, day, &input) {
                    Ok(mut solver) => solve_part(&mut *solver, part),
                    Err(e) => SolverResult::failed(year, day, part, e.into()),
                };
                send(tx, result)
            },
        )
    } else {
        match ctx.registry.create_solver(year, day, &input) {
            Ok(mut solver) => {
                for part in work.parts.clone() {
                    send(tx, solve_part(&mut *solver, part))?;
                }
            }
            Err(e) => {
                tracing::debug!(year, day, error = %e, "solver construction failed");
                for part in work.parts.clone() {
                    send(tx, SolverResult::failed(year, day, part, replicate(&e).into()))?;
                }
            }
        }
        Ok(())
    }
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(SolverError::Solve(e).into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

/// Copy of `err` for reporting against each part of a failed puzzle
fn replicate(err: &SolverError) -> SolverError {
    match err {
        SolverError::NotFound(y, d) => SolverError::NotFound(*y, *d),
        SolverError::InvalidYearDay(y, d) => SolverError::InvalidYearDay(*y, *d),
        SolverError::Parse(e) => SolverError::Parse(e.clone()),
        SolverError::Solve(e) => SolverError::Solve(SolveError::failed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_filter_respects_solver_parts() {
        assert_eq!(filter_parts(None, 2), Some(1..=2));
        assert_eq!(filter_parts(Some(2), 2), Some(2..=2));
        assert_eq!(filter_parts(Some(2), 1), None);
        assert_eq!(filter_parts(None, 0), None);
    }

    #[test]
    fn combine_errors_keeps_every_failure() {
        let err = || Some(ArcExecutorError::from(ExecutorError::ChannelSend));
        assert!(combine_errors(None, None).is_none());
        assert!(combine_errors(err(), None).is_some());
        let both = combine_errors(err(), err()).unwrap();
        assert!(matches!(both.inner(), ExecutorError::Multiple(v) if v.len() == 2));
    }

    #[test]
    fn replicated_parse_errors_keep_their_message() {
        let original = SolverError::Parse(aoc_solver::ParseError::InvalidFormat("bad".into()));
        assert_eq!(replicate(&original).to_string(), original.to_string());
    }
}
