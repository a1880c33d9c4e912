//! A directory of all the tables we can write

pub mod name;
