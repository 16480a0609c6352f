pub mod cli;
pub mod dates;
pub mod dicts;
pub mod error;
pub mod expand;
pub mod options;
pub mod output;
pub mod runner;
pub mod target;
pub mod variants;
