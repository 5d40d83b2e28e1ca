//! sonar - IP-Sonar geolocation lookups from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ipsonar_cli::run().await
}
