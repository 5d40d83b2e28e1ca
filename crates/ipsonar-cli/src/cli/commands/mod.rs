//! Command implementations.

pub mod batch;
pub mod config;
pub mod lookup;
pub mod myip;

use ipsonar::{
    create_client, ClientConfig, IpSonarClient, LookupParams, RequestOptions, DEFAULT_BASE_URL,
};
use std::path::PathBuf;
use std::time::Duration;

use super::args::Cli;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Client settings from the config file, with flag overrides applied
    pub client_config: ClientConfig,

    /// Per-call overrides from command-line flags
    pub options: RequestOptions,

    /// Output format
    pub output_format: OutputFormat,

    /// Config file in use
    pub config_path: PathBuf,
}

impl Context {
    /// Combine flags, env vars and the config file.
    ///
    /// `--fields`/`--locale`/`--timeout` are sent as per-call overrides so
    /// the config file values act as the client's defaults.
    pub fn resolve(cli: &Cli, config: &Config, config_path: PathBuf) -> Self {
        let mut client_config = ClientConfig::new().base_url(
            cli.base_url
                .clone()
                .or_else(|| config.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );

        if let Some(key) = cli.api_key.clone().or_else(|| config.api_key.clone()) {
            client_config = client_config.api_key(key);
        }

        let defaults = LookupParams {
            fields: config.fields.clone(),
            locale_code: config.locale_code,
        };
        if !defaults.is_empty() {
            client_config = client_config.default_params(defaults);
        }

        if let Some(ms) = config.timeout_ms {
            client_config = client_config.timeout(Duration::from_millis(ms));
        }

        let overrides = LookupParams {
            fields: cli.fields.clone(),
            locale_code: cli.locale,
        };
        let options = RequestOptions {
            params: (!overrides.is_empty()).then_some(overrides),
            timeout: cli.timeout.map(Duration::from_millis),
        };

        Self {
            client_config,
            options,
            output_format: cli.output.or(config.output_format).unwrap_or_default(),
            config_path,
        }
    }

    /// Create an IP-Sonar client from the resolved settings.
    pub fn client(&self) -> anyhow::Result<IpSonarClient> {
        Ok(create_client(self.client_config.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ipsonar::LocaleCode;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "sonar",
            "myip",
            "--api-key",
            "from-flag",
            "--base-url",
            "http://localhost:9000",
            "--locale",
            "fr",
            "--timeout",
            "1500",
            "-o",
            "csv",
        ]);
        let config = Config {
            api_key: Some("from-file".to_string()),
            locale_code: Some(LocaleCode::De),
            fields: Some("city_name".to_string()),
            output_format: Some(OutputFormat::Json),
            timeout_ms: Some(3000),
            ..Config::default()
        };

        let ctx = Context::resolve(&cli, &config, PathBuf::from("config.toml"));

        assert_eq!(ctx.client_config.api_key.as_deref(), Some("from-flag"));
        assert_eq!(ctx.client_config.base_url, "http://localhost:9000");
        assert_eq!(ctx.client_config.timeout, Duration::from_millis(3000));
        assert_eq!(ctx.options.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(ctx.output_format, OutputFormat::Csv);

        let merged = LookupParams::merge(
            ctx.client_config.default_params.as_ref(),
            ctx.options.params.as_ref(),
        )
        .unwrap();
        assert_eq!(merged.fields.as_deref(), Some("city_name"));
        assert_eq!(merged.locale_code, Some(LocaleCode::Fr));
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = parse(&["sonar", "myip", "--base-url", "http://x"]);
        let ctx = Context::resolve(&cli, &Config::default(), PathBuf::from("c.toml"));

        assert!(ctx.client_config.default_params.is_none());
        assert!(ctx.options.params.is_none());
        assert!(ctx.options.timeout.is_none());
        assert_eq!(ctx.output_format, OutputFormat::Pretty);
    }
}
