//! Query routing service logic.

pub mod query;
