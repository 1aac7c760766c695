//! Helpers shared by more than one day

pub mod grid;
pub mod input;
