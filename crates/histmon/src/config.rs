use std::fmt;

use anyhow::{bail, Result};

use crate::cli::Cli;

/// Webhook settings shared by `install` and `send`.
#[derive(Clone, Default)]
pub struct Config {
    endpoint: Option<String>,
    token: Option<String>,
}

impl Config {
    pub fn new(endpoint: Option<String>, token: Option<String>) -> Self {
        Self {
            endpoint: normalize(endpoint),
            token: normalize(token),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.endpoint.clone(), cli.token.clone())
    }

    /// Webhook URL, failing when `ENDPOINT` was not provided.
    pub fn endpoint(&self) -> Result<&str> {
        match self.endpoint.as_deref() {
            Some(endpoint) => Ok(endpoint),
            None => bail!("Please set ENDPOINT environment variable"),
        }
    }

    /// Access token, failing when `TOKEN` was not provided.
    pub fn token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) => Ok(token),
            None => bail!("Please set TOKEN environment variable"),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
