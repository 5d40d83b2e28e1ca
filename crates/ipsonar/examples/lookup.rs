//! Basic example demonstrating IP-Sonar API usage.
//!
//! Run with: cargo run -p ipsonar --example lookup
//!
//! Set the IPSONAR_API_KEY environment variable to use your own quota.

use ipsonar::{create_client, ClientConfig, LocaleCode, LookupParams, RequestOptions, Result};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = ClientConfig::new()
        .default_params(LookupParams::new().locale(LocaleCode::En))
        .timeout(Duration::from_secs(5));

    if let Ok(key) = std::env::var("IPSONAR_API_KEY") {
        config = config.api_key(key);
    }

    let client = create_client(config)?;

    println!("=== My IP ===");
    let me = client.lookup_my_ip().await?;
    println!("IP: {:?}", me.ip);
    println!("Country: {:?}", me.country_name);
    println!("City: {:?}", me.city_name);
    println!();

    println!("=== 8.8.8.8 (selected fields, German names) ===");
    let options = RequestOptions::new().params(
        LookupParams::new()
            .fields(["country_name", "city_name", "timezone"])
            .locale(LocaleCode::De),
    );
    let geo = client.lookup_ip_with("8.8.8.8", &options).await?;
    println!("Country: {:?}", geo.country_name);
    println!("City: {:?}", geo.city_name);
    println!("Timezone: {:?}", geo.timezone);
    println!();

    println!("=== Batch ===");
    let batch = client.batch_lookup(["8.8.8.8", "1.1.1.1"]).await?;
    for geo in &batch.data {
        println!(
            "  {}: {}",
            geo.ip.as_deref().unwrap_or("?"),
            geo.country_name.as_deref().unwrap_or("unknown")
        );
    }
    println!();

    println!("=== Error handling ===");
    match client.lookup_ip("not-an-ip").await {
        Ok(geo) => println!("Unexpected success: {geo:?}"),
        Err(err) => println!("Error (status {:?}): {err}", err.status()),
    }

    Ok(())
}
