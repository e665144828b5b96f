use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_TIMEOUT_SECS, NWS_API_BASE, USER_AGENT};

/// Command-line options for the server binary.
#[derive(Debug, Parser)]
#[command(name = "nws-weather-mcp", version, about = "NWS weather alerts and forecasts over MCP (stdio)")]
pub struct Cli {
    /// Base URL of the National Weather Service API.
    #[arg(long, env = "NWS_API_BASE", default_value = NWS_API_BASE)]
    pub api_base: String,

    /// Identifying User-Agent sent with every upstream request.
    #[arg(long, env = "NWS_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "NWS_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            api_base: self.api_base.trim_end_matches('/').to_string(),
            user_agent: self.user_agent,
            timeout: Duration::from_secs(self.timeout_secs),
            https_only: true,
        }
    }
}

/// Settings for the upstream client and the tool service.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Refuse plain-HTTP upstream URLs.
    pub https_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            https_only: true,
        }
    }
}
