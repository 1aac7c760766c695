//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How work is split across the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Everything on one thread, in (year, day, part) order
    Sequential,
    /// One task per year
    Year,
    /// One task per puzzle; its parts share one parsed input
    #[default]
    Day,
    /// One task per part; each part parses its own copy of the input
    Part,
}

/// Run Advent of Code solvers against local puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Only run this year
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Only run this day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Only run this part
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding inputs laid out as `{input_dir}/{year}/day{DD}.txt`,
    /// relative to the working directory. The bundled example inputs live
    /// under `aoc-2022/tests/fixtures`.
    #[arg(short, long, default_value = "fixtures")]
    pub input_dir: PathBuf,

    /// Worker threads (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Only print answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("fixtures"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn input_dir_override() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "aoc-2022/tests/fixtures"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("aoc-2022/tests/fixtures"));
        let args = Args::try_parse_from(["aoc", "-i", "inputs"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
    }

    #[test]
    fn filters_and_tags() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2022", "-d", "7", "-p", "2", "--tags", "grid,bfs", "--parallelize-by",
            "part",
        ])
        .unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2022), Some(7), Some(2)));
        assert_eq!(args.tags, vec!["grid", "bfs"]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
    }

    #[test]
    fn rejects_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
