//! A generator of conflict-free weekly class schedules, driven by an
//! in-memory course catalog.
//!
//! At a high level, classplan is designed to do the following:
//! - Parse short textual meeting patterns (like `MoWeFr 10:00AM-10:50AM`)
//!   into weekday sets and minute-of-day ranges.
//! - Decide whether meeting patterns collide on any shared weekday.
//! - Enumerate every selection of one section per requested course group
//!   with no pairwise conflict, honoring pre-search filters and returning
//!   at most a requested number of results (uniformly sampled, and
//!   reproducible under a fixed seed).

mod constants;
mod util;

pub mod catalog;
pub mod conflict;
pub mod parser;
pub mod planner;
pub mod records;
pub mod types;
