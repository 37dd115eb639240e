//! CLI module for todor - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for adding, toggling,
//! removing, and listing todo items.

pub mod commands;

pub use commands::Cli;
