//! Command-line interface: inspect the demo route table and resolve
//! ad-hoc requests against it.

mod commands;

pub use commands::{run, Cli, Commands};
