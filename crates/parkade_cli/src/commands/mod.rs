//! CLI command implementations.

pub mod fees;
pub mod quote;
pub mod simulate;
