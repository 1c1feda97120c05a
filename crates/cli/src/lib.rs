// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod generate;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod progress;
pub mod units;
