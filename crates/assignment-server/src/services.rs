//! Assignment generation service logic.

pub mod assignment;
