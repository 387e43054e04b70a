//! Match log parsing for two-player card game replays.
//!
//! The crate turns a raw match log file into a [`model::MatchRecord`]:
//! who played, what they played, who went first, starting hand sizes,
//! winners, and how long each game ran. Logs that do not describe a
//! complete match are skipped rather than failing the run.
//!
//! Entry point: [`parser::parse_match`].

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod resolve;
