//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use ipsonar::LocaleCode;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Command-line interface for the IP-Sonar geolocation API
///
/// Look up where an IP address is: country, region, city, timezone.
///
/// Get your API key at: https://ip-sonar.com
#[derive(Parser, Debug)]
#[command(name = "sonar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// IP-Sonar API key (or set IPSONAR_API_KEY env var)
    #[arg(short = 'k', long, env = "IPSONAR_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "IPSONAR_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Comma-separated fields to return (e.g. "country_code,city_name")
    #[arg(short, long, global = true)]
    pub fields: Option<String>,

    /// Language for place names (de, en, es, fr, ja, pt-br, ru, zh-cn)
    #[arg(short, long, global = true)]
    pub locale: Option<LocaleCode>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to the configuration file
    #[arg(long, env = "IPSONAR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up your own public IP address
    Myip,

    /// Look up a single IP address
    Lookup(LookupArgs),

    /// Look up up to 100 IP addresses in one request
    Batch(BatchArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Lookup command
// ============================================================================

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// IP address to look up
    pub ip: String,
}

// ============================================================================
// Batch command
// ============================================================================

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// IP addresses (comma-separated or multiple args)
    #[arg(required = true)]
    pub ips: Vec<String>,
}

impl BatchArgs {
    /// Flatten comma-separated arguments, keeping order
    pub fn addresses(&self) -> Vec<String> {
        self.ips
            .iter()
            .flat_map(|arg| arg.split(','))
            .map(|ip| ip.trim().to_string())
            .collect()
    }
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },

    /// Show the configuration file path
    Path,
}
