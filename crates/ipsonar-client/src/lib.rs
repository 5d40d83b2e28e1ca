//! HTTP client for the IP-Sonar geolocation API.
//!
//! This crate provides the main [`IpSonarClient`] for interacting with the IP-Sonar API.

#![doc(html_root_url = "https://docs.rs/ipsonar-client/1.0.0")]

mod client;
mod config;
mod transport;

pub use client::{IpSonarClient, IpSonarClientBuilder};
pub use config::*;
pub use ipsonar_core::{Result, SonarError};

/// Version of this SDK
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("ipsonar-rust/", env!("CARGO_PKG_VERSION"));
