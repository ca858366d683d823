//! CLI module graph.

pub mod command;
pub mod console;
pub mod run;
pub mod transfers;
pub mod wallets;

pub use command::{Cli, Commands};
