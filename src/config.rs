use secrecy::{ExposeSecret, SecretString};

use crate::errors::RunError;
use crate::github::{DEFAULT_API_URL, GithubClient};

/// Settings read once at startup.
#[derive(Debug)]
pub struct Config {
    pub token: SecretString,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            token: var("GITHUB_TOKEN").unwrap_or_default().into(),
            api_url: var("GITHUB_API_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Builds the API client, checking the token and URL first.
    pub fn github_client(&self) -> Result<GithubClient, RunError> {
        if self.token.expose_secret().is_empty() {
            return Err(RunError::MissingToken);
        }
        let api_url = url::Url::parse(&self.api_url).map_err(|e| {
            RunError::InvalidConfig(format!("GITHUB_API_URL {:?} is invalid: {e}", self.api_url))
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(RunError::InvalidConfig(format!(
                "GITHUB_API_URL {:?} must be an http(s) URL",
                self.api_url
            )));
        }
        Ok(GithubClient::new(self.token.clone(), self.api_url.clone()))
    }
}
