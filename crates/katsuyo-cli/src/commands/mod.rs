//! CLI command implementations.

pub mod categories;
pub mod classify;
pub mod conjugate;
pub mod generate;
pub mod status;
