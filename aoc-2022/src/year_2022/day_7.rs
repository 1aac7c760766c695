use std::collections::BTreeMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

const ROOT: usize = 0;

#[derive(Debug)]
struct Dir<'a> {
    name: &'a str,
    parent: Option<usize>,
    children: Vec<usize>,
    file_bytes: u64,
}

/// Directory tree rebuilt from a terminal transcript, stored in an arena
#[derive(Debug)]
pub struct FileSystem<'a> {
    dirs: Vec<Dir<'a>>,
    /// Recursive size of each directory, same indexing as `dirs`
    totals: Vec<u64>,
}

impl<'a> FileSystem<'a> {
    fn new() -> Self {
        Self {
            dirs: vec![Dir {
                name: "",
                parent: None,
                children: Vec::new(),
                file_bytes: 0,
            }],
            totals: Vec::new(),
        }
    }

    fn child(&mut self, parent: usize, name: &'a str) -> usize {
        if let Some(&existing) = self.dirs[parent]
            .children
            .iter()
            .find(|&&c| self.dirs[c].name == name)
        {
            return existing;
        }
        self.dirs.push(Dir {
            name,
            parent: Some(parent),
            children: Vec::new(),
            file_bytes: 0,
        });
        let id = self.dirs.len() - 1;
        self.dirs[parent].children.push(id);
        id
    }

    /// Children are always pushed after their parent, so a reverse sweep
    /// sees every subtree complete before its root.
    fn compute_totals(&mut self) {
        self.totals = self.dirs.iter().map(|d| d.file_bytes).collect();
        for id in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[id].parent {
                self.totals[parent] += self.totals[id];
            }
        }
    }

    fn path(&self, mut id: usize) -> String {
        let mut names = Vec::new();
        while let Some(parent) = self.dirs[id].parent {
            names.push(self.dirs[id].name);
            id = parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    pub fn used(&self) -> u64 {
        self.totals[ROOT]
    }

    /// Full path of every directory mapped to its recursive size
    pub fn size_report(&self) -> BTreeMap<String, u64> {
        (0..self.dirs.len())
            .map(|id| (self.path(id), self.totals[id]))
            .collect()
    }
}

fn replay<'a>(fs: &mut FileSystem<'a>, cwd: &mut usize, line: &'a str) -> anyhow::Result<()> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("$"), Some("cd"), Some("/")) => *cwd = ROOT,
        (Some("$"), Some("cd"), Some("..")) => {
            *cwd = fs.dirs[*cwd]
                .parent
                .ok_or_else(|| anyhow!("`cd ..` from the root directory"))?;
        }
        (Some("$"), Some("cd"), Some(name)) => *cwd = fs.child(*cwd, name),
        (Some("$"), Some("ls"), None) => {}
        (Some("$"), _, _) => bail!("unknown command {line:?}"),
        (Some("dir"), Some(name), None) => {
            fs.child(*cwd, name);
        }
        (Some(size), Some(_), None) => {
            fs.dirs[*cwd].file_bytes += size
                .parse::<u64>()
                .map_err(|e| anyhow!("bad file size {size:?}: {e}"))?;
        }
        _ => bail!("unrecognised line {line:?}"),
    }
    Ok(())
}

impl AocParser for Solver {
    type SharedData<'a> = FileSystem<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut fs = FileSystem::new();
        let mut cwd = ROOT;
        for (idx, line) in lines(input).enumerate().filter(|(_, l)| !l.is_empty()) {
            replay(&mut fs, &mut cwd, line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))?;
        }
        fs.compute_totals();
        Ok(fs)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .totals
            .iter()
            .filter(|&&size| size <= SMALL_DIR_LIMIT)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let free = DISK_SIZE.saturating_sub(shared.used());
        let needed = UPDATE_SIZE.saturating_sub(free);
        shared
            .totals
            .iter()
            .copied()
            .filter(|&size| size >= needed)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| SolveError::failed(format!("no directory frees {needed} bytes")))
    }
}
