//! The tables we know how to read

pub mod name;
