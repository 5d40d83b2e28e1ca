//! Core types and errors for the IP-Sonar geolocation API client.
//!
//! This crate provides the foundational types used across the IP-Sonar library:
//!
//! - **Types**: Strongly-typed representations of IP-Sonar requests and responses
//! - **Errors**: Classified failures with [`SonarError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ipsonar_core::{GeoLocation, Result};
//!
//! fn print_location(geo: &GeoLocation) -> Result<()> {
//!     println!("IP: {:?}", geo.ip);
//!     println!("Country: {:?}", geo.country_name);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/ipsonar-core/1.0.0")]

mod error;
pub mod types;

pub use error::{Result, SonarError};
pub use types::*;
