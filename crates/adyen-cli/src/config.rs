/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration and a ready AdyenClient
[POS]:    Configuration layer - credentials and merchant setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use adyen_adapter::{
    AdyenClient, ClientConfig, Credentials, DEFAULT_CURRENCY, Endpoints, Environment,
};

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// "test" or "live"
    #[serde(default)]
    pub environment: EnvironmentKind,
    /// Live endpoint prefix from the Customer Area (live only)
    #[serde(default)]
    pub live_url_prefix: Option<String>,
    /// Web-service user
    pub username: String,
    pub password: String,
    /// Skin HMAC key (hex), needed for hosted payment pages
    #[serde(default)]
    pub hmac_key: Option<String>,
    pub merchant_account: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Client-side encryption id
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub skin_code: Option<String>,
    /// Request timeout; unset means no limit
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Serve every endpoint from this host instead (mock servers)
    #[serde(default)]
    pub endpoint_host: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentKind {
    #[default]
    Test,
    Live,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn environment(&self) -> anyhow::Result<Environment> {
        match self.environment {
            EnvironmentKind::Test => Ok(Environment::Test),
            EnvironmentKind::Live => {
                let Some(prefix) = self.live_url_prefix.as_deref() else {
                    bail!("live_url_prefix is required for the live environment");
                };
                Ok(Environment::live(prefix))
            }
        }
    }

    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        let environment = self.environment()?;
        Ok(match &self.hmac_key {
            Some(hmac_key) => Credentials::with_hmac(
                environment,
                &self.username,
                &self.password,
                hmac_key,
            ),
            None => Credentials::basic(environment, &self.username, &self.password),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            currency: self.currency.clone(),
            merchant_account: Some(self.merchant_account.clone()),
            client_id: self.client_id.clone(),
            skin_code: self.skin_code.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    pub fn build_client(&self) -> anyhow::Result<AdyenClient> {
        let credentials = self.credentials()?;
        let endpoints = match &self.endpoint_host {
            Some(host) => Endpoints::with_host(host),
            None => Endpoints::for_environment(credentials.environment()),
        };
        AdyenClient::with_config_and_endpoints(credentials, self.client_config(), endpoints)
            .context("create adyen client")
    }
}
