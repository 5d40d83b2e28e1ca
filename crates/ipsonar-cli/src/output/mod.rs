//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use ipsonar::GeoLocation;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Flat row used for CSV and table output.
#[derive(Debug, Default, Serialize, Tabled)]
pub struct GeoRow {
    #[tabled(rename = "IP")]
    pub ip: String,
    #[tabled(rename = "Continent")]
    pub continent_code: String,
    #[tabled(rename = "Country")]
    pub country_code: String,
    #[tabled(rename = "Region")]
    pub subdivision_1_name: String,
    #[tabled(rename = "City")]
    pub city_name: String,
    #[tabled(rename = "Postal")]
    pub postal_code: String,
    #[tabled(rename = "Timezone")]
    pub timezone: String,
    #[tabled(rename = "Lat")]
    pub latitude: String,
    #[tabled(rename = "Lon")]
    pub longitude: String,
    #[tabled(rename = "EU")]
    pub is_in_eu: String,
}

impl From<&GeoLocation> for GeoRow {
    fn from(geo: &GeoLocation) -> Self {
        fn text<T: ToString>(value: Option<&T>) -> String {
            value.map(ToString::to_string).unwrap_or_default()
        }

        Self {
            ip: text(geo.ip.as_ref()),
            continent_code: text(geo.continent_code.as_ref()),
            country_code: text(geo.country_code.as_ref()),
            subdivision_1_name: text(geo.subdivision_1_name.as_ref()),
            city_name: text(geo.city_name.as_ref()),
            postal_code: text(geo.postal_code.as_ref()),
            timezone: text(geo.timezone.as_ref()),
            latitude: text(geo.latitude.as_ref()),
            longitude: text(geo.longitude.as_ref()),
            is_in_eu: text(geo.is_in_eu.as_ref()),
        }
    }
}

/// Render records as CSV with a header row.
pub fn to_csv(records: &[GeoLocation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for geo in records {
        writer.serialize(GeoRow::from(geo))?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Print a single record in the requested format.
pub fn print_location(geo: &GeoLocation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(geo)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(geo)?),
        OutputFormat::Csv => print!("{}", to_csv(std::slice::from_ref(geo))?),
        OutputFormat::Pretty => print_location_pretty(geo),
    }

    std::io::stdout().flush()?;
    Ok(())
}

/// Print several records in the requested format.
pub fn print_locations(records: &[GeoLocation], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(records)?),
        OutputFormat::Csv => print!("{}", to_csv(records)?),
        OutputFormat::Pretty => {
            let rows: Vec<GeoRow> = records.iter().map(GeoRow::from).collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
            println!("{}", format!("{} result(s)", records.len()).dimmed());
        }
    }

    std::io::stdout().flush()?;
    Ok(())
}

fn print_location_pretty(geo: &GeoLocation) {
    let ip = geo.ip.as_deref().unwrap_or("(unknown)");
    println!("{} {}", "IP:".bold(), ip.cyan().bold());
    println!();

    let place = [
        geo.city_name.as_deref(),
        geo.subdivision_2_name.as_deref(),
        geo.subdivision_1_name.as_deref(),
        geo.country_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
    if !place.is_empty() {
        println!("  {} {}", "Location:".bold(), place);
    }

    if let Some(code) = &geo.country_code {
        println!("  {} {}", "Country code:".bold(), code);
    }
    if let Some(continent) = geo.continent_code {
        let name = geo.continent_name.as_deref().unwrap_or_else(|| continent.name());
        println!("  {} {} ({})", "Continent:".bold(), name, continent);
    }
    if let Some(postal) = &geo.postal_code {
        println!("  {} {}", "Postal code:".bold(), postal);
    }
    if let Some((lat, lon)) = geo.coordinates() {
        let radius = geo
            .accuracy_radius
            .map(|r| format!(" (±{r} km)"))
            .unwrap_or_default();
        println!("  {} {lat}, {lon}{radius}", "Coordinates:".bold());
    }
    if let Some(tz) = &geo.timezone {
        println!("  {} {}", "Timezone:".bold(), tz);
    }
    if let Some(eu) = geo.is_in_eu {
        let value = if eu { "yes".green() } else { "no".normal() };
        println!("  {} {}", "In EU:".bold(), value);
    }
}
