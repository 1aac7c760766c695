//! Puzzle inputs read from a local directory

use crate::error::FixtureError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Read-only store of puzzle inputs.
///
/// Layout: `{root}/{year}/day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Input for `year`/`day`, or `None` when no file exists
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, FixtureError> {
        let path = self.path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FixtureError::Read { path, source }),
        }
    }
}
