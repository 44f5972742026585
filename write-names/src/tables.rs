//! A directory of all the tables we know how to write.

pub mod name;
