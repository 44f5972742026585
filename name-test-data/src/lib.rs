//! test data shared between the name table crates.

pub mod bebuffer;
pub mod name;
