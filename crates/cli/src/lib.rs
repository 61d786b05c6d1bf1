//! Ledgerkit CLI - Command orchestration
//!
//! This crate provides the `ledgerkit` binary, its configuration and commands.

pub mod commands;
pub mod config;

pub use commands::{TemplateArgs, TemplateKind};
pub use config::{CliConfig, ConfigError};
