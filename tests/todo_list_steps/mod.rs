//! Step definitions for task list BDD scenarios.

pub mod world;

mod when;
