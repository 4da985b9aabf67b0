use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

fn default_service_name() -> String {
    "video-processor".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            server_port: default_server_port(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Builds the config from explicit `(NAME, value)` pairs, e.g. `("SERVER_PORT", "9000")`.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid environmental variable: {}", e))?;
        Ok(config)
    }
}
