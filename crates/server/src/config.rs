use std::path::PathBuf;

use microcms::SecretString;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server reads from its environment at startup.
#[derive(Debug)]
pub struct Config {
    pub service_domain: String,
    pub api_key: SecretString,
    pub port: u16,
    pub templates_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template_auto_reload: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let service_domain =
            get("MICROCMS_SERVICE_DOMAIN").ok_or(ConfigError::Missing("MICROCMS_SERVICE_DOMAIN"))?;
        let api_key = get("MICROCMS_API_KEY").ok_or(ConfigError::Missing("MICROCMS_API_KEY"))?;

        let port = match get("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let template_auto_reload = match get("TEMPLATE_AUTO_RELOAD") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "TEMPLATE_AUTO_RELOAD",
                value,
            })?,
            None => false,
        };

        Ok(Config {
            service_domain,
            api_key: SecretString::from(api_key),
            port,
            templates_dir: get("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("templates")),
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            template_auto_reload,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
