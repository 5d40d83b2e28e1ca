//! # ipsonar-cli
//!
//! Command-line interface for the IP-Sonar geolocation API.
//!
//! ## Features
//!
//! - **Lookups**: your own IP, a single address, or up to 100 addresses at once
//! - **Field selection and localized names**: `--fields`, `--locale`
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML
//! - **Persistent configuration**: `sonar config set api_key <KEY>`

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
