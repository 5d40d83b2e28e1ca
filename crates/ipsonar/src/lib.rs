//! Rust client for the IP-Sonar geolocation API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ipsonar::{create_client, ClientConfig, LocaleCode, LookupParams};
//!
//! #[tokio::main]
//! async fn main() -> ipsonar::Result<()> {
//!     let client = create_client(
//!         ClientConfig::new()
//!             .api_key("your-api-key")
//!             .default_params(LookupParams::new().locale(LocaleCode::En)),
//!     )?;
//!
//!     // Look up your own IP
//!     let me = client.lookup_my_ip().await?;
//!     println!("You are in {:?}", me.country_name);
//!
//!     // Look up a specific IP
//!     let geo = client.lookup_ip("8.8.8.8").await?;
//!     println!("City: {:?}", geo.city_name);
//!
//!     // Batch lookup (1-100 addresses)
//!     let batch = client.batch_lookup(["8.8.8.8", "1.1.1.1"]).await?;
//!     for geo in batch {
//!         println!("{:?}: {:?}", geo.ip, geo.country_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/ipsonar/1.0.0")]

// Re-export core types
pub use ipsonar_core::*;

// Re-export client
pub use ipsonar_client::{
    ClientConfig, IpSonarClient, IpSonarClientBuilder, RequestOptions, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, SDK_VERSION, USER_AGENT,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;

/// Create a new client from a configuration
pub fn create_client(config: ClientConfig) -> Result<IpSonarClient> {
    IpSonarClient::with_config(config)
}
