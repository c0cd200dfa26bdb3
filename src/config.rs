//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NAMING_CASING` - `camel`, `pascal`, `kebab` or `snake` (default: `kebab`)
//! - `NAMING_JSON_CASING` - Style for JSON property names, or `none` (default: `camel`)
//! - `NAMING_TRANSFORM_PARAMETERS` - Rename route parameters too (default: `false`)
//! - `NAMING_TRANSFORM_OUTBOUND` - Rename generated link values (default: `true`)
//! - `NAMING_TRANSFORM_QUERY_KEYS` - Resolve query keys by convention (default: `true`)
//! - `NAMING_EXCLUDED_ROUTES` - Comma-separated route globs left as declared
//! - `NAMING_EXCLUDED_NAMES` - Comma-separated route names left as declared
//! - `NAMING_EXCLUDED_TAGS` - Comma-separated tag globs left as declared
//!
//! ```bash
//! export NAMING_CASING=snake
//! export NAMING_EXCLUDED_ROUTES="/Legacy/**,/Api/Internal/*"
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::casing::CasingStyle;
use crate::convention::ConventionOptions;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub casing: CasingStyle,
    /// `None` turns response key renaming off.
    pub json_casing: Option<CasingStyle>,
    pub transform_parameters: bool,
    pub transform_outbound: bool,
    pub transform_query_keys: bool,
    pub excluded_routes: Vec<String>,
    pub excluded_names: Vec<String>,
    pub excluded_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            casing: CasingStyle::Kebab,
            json_casing: Some(CasingStyle::Camel),
            transform_parameters: false,
            transform_outbound: true,
            transform_query_keys: true,
            excluded_routes: Vec::new(),
            excluded_names: Vec::new(),
            excluded_tags: Vec::new(),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a casing variable names an unknown style.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let casing = env::var("NAMING_CASING")
            .unwrap_or_else(|_| "kebab".to_string())
            .parse()
            .context("Invalid NAMING_CASING")?;

        let json_casing = match env::var("NAMING_JSON_CASING") {
            Ok(v) if v.eq_ignore_ascii_case("none") || v.is_empty() => None,
            Ok(v) => Some(v.parse().context("Invalid NAMING_JSON_CASING")?),
            Err(_) => Some(CasingStyle::Camel),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            casing,
            json_casing,
            transform_parameters: env_flag("NAMING_TRANSFORM_PARAMETERS", false),
            transform_outbound: env_flag("NAMING_TRANSFORM_OUTBOUND", true),
            transform_query_keys: env_flag("NAMING_TRANSFORM_QUERY_KEYS", true),
            excluded_routes: env_list("NAMING_EXCLUDED_ROUTES"),
            excluded_names: env_list("NAMING_EXCLUDED_NAMES"),
            excluded_tags: env_list("NAMING_EXCLUDED_TAGS"),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an exclusion entry is rejected by [`ConventionOptions::validated`]
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.convention_options()
            .validated()
            .context("Invalid naming convention settings")?;

        Ok(())
    }

    /// Naming convention settings described by this configuration.
    pub fn convention_options(&self) -> ConventionOptions {
        ConventionOptions {
            casing: self.casing,
            json_casing: self.json_casing,
            transform_parameter_names: self.transform_parameters,
            transform_outbound: self.transform_outbound,
            transform_query_keys: self.transform_query_keys,
            excluded_routes: self.excluded_routes.clone(),
            excluded_names: self.excluded_names.clone(),
            excluded_tags: self.excluded_tags.clone(),
            should_transform_route: None,
            should_transform_outbound: None,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Casing: {}", self.casing);
        match self.json_casing {
            Some(style) => tracing::info!("  JSON casing: {style}"),
            None => tracing::info!("  JSON casing: disabled"),
        }
        tracing::info!(
            "  Transform parameters/outbound/query keys: {}/{}/{}",
            self.transform_parameters,
            self.transform_outbound,
            self.transform_query_keys
        );
        if !self.excluded_routes.is_empty() {
            tracing::info!("  Excluded routes: {}", self.excluded_routes.join(", "));
        }
        if !self.excluded_names.is_empty() {
            tracing::info!("  Excluded names: {}", self.excluded_names.join(", "));
        }
        if !self.excluded_tags.is_empty() {
            tracing::info!("  Excluded tags: {}", self.excluded_tags.join(", "));
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable does not parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
