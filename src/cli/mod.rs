//! CLI module for forge - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
