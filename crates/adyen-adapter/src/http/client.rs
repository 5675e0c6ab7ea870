/*
[INPUT]:  Credentials, client configuration (currency, merchant, timeouts)
[OUTPUT]: Configured reqwest client bound to one environment's endpoints
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Url};

use crate::auth::{Credentials, Environment};
use crate::hpp::HppGateway;
use crate::http::{AdyenError, ModificationGateway, PaymentGateway, Result};
use crate::types::Amount;

/// Version of the Adyen payment API
pub const API_VERSION: &str = "v25";

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "EUR";

const PAYMENT_PATH: &str = "/pal/servlet/Payment";
const CSE_PATH: &str = "/hpp/cse/js/";
const HPP_PATH: &str = "/hpp/";

/// Client configuration, fixed for the lifetime of an [`AdyenClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Currency for amounts built with [`AdyenClient::amount`]
    pub currency: String,
    /// Merchant account filled into requests that leave it unset
    pub merchant_account: Option<String>,
    /// Client-side encryption id used by [`AdyenClient::client_url`]
    pub client_id: Option<String>,
    /// HPP skin code used for hosted payment pages
    pub skin_code: Option<String>,
    /// Whole request timeout; `None` keeps the transport default (no limit)
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            merchant_account: None,
            client_id: None,
            skin_code: None,
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Base URLs of one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Payment API base, without API version
    pub payment: String,
    /// Client-side encryption script base, ends with `/`
    pub client: String,
    /// Hosted payment pages base, ends with `/`
    pub hpp: String,
}

impl Endpoints {
    pub fn for_environment(environment: &Environment) -> Self {
        match environment {
            Environment::Test => Self {
                payment: format!("https://pal-test.adyen.com{PAYMENT_PATH}"),
                client: format!("https://test.adyen.com{CSE_PATH}"),
                hpp: format!("https://test.adyen.com{HPP_PATH}"),
            },
            Environment::Live { url_prefix } => Self {
                payment: format!("https://{url_prefix}-pal-live.adyenpayments.com{PAYMENT_PATH}"),
                client: format!("https://live.adyen.com{CSE_PATH}"),
                hpp: format!("https://live.adyen.com{HPP_PATH}"),
            },
        }
    }

    /// All endpoints served from one host, e.g. a mock server
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            payment: format!("{host}{PAYMENT_PATH}"),
            client: format!("{host}{CSE_PATH}"),
            hpp: format!("{host}{HPP_PATH}"),
        }
    }
}

/// Main HTTP client for the Adyen payment API
#[derive(Debug, Clone)]
pub struct AdyenClient {
    pub(crate) http_client: Client,
    pub(crate) credentials: Credentials,
    endpoints: Endpoints,
    config: ClientConfig,
}

impl AdyenClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let endpoints = Endpoints::for_environment(credentials.environment());
        Self::with_config_and_endpoints(credentials, config, endpoints)
    }

    /// Create a new client that talks to explicit base URLs
    pub fn with_config_and_endpoints(
        credentials: Credentials,
        config: ClientConfig,
        endpoints: Endpoints,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            credentials,
            endpoints,
            config,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Configured transaction currency
    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Amount in minor units of the configured currency
    pub fn amount(&self, value: i64) -> Amount {
        Amount::new(value, self.config.currency.clone())
    }

    /// URL of the client-side encryption script to load in the shopper's
    /// browser
    pub fn client_url(&self) -> Result<String> {
        let client_id = self
            .config
            .client_id
            .as_deref()
            .ok_or_else(|| AdyenError::Config("client_id is not configured".to_string()))?;
        Ok(format!("{}{}.shtml", self.endpoints.client, client_id))
    }

    /// Build full URL for a payment endpoint
    pub fn payment_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.endpoints.payment.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{API_VERSION}/{endpoint}"))?)
    }

    /// Build full URL for a hosted payment page
    pub fn hpp_url(&self, page: &str) -> Result<Url> {
        let base = self.endpoints.hpp.trim_end_matches('/');
        let page = page.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{page}"))?)
    }

    /// Payment operations (authorise, 3-D Secure)
    pub fn payment(&self) -> PaymentGateway<'_> {
        PaymentGateway::new(self)
    }

    /// Modification operations (capture, cancel, refund)
    pub fn modification(&self) -> ModificationGateway<'_> {
        ModificationGateway::new(self)
    }

    /// Hosted payment page signing and lookups; requires an HMAC key
    pub fn hpp(&self) -> Result<HppGateway<'_>> {
        HppGateway::new(self)
    }

    pub(crate) fn fill_merchant_account(&self, merchant_account: &mut Option<String>) {
        if merchant_account.is_none() {
            *merchant_account = self.config.merchant_account.clone();
        }
    }
}
