//! Step definitions for task verification behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
