/*
[INPUT]:  Environment, web-service username/password, optional HMAC key
[OUTPUT]: Credentials (basic auth, optionally with HPP signing key)
[POS]:    Auth layer - credential construction and access
[UPDATE]: When adding new credential kinds or environments
*/

use std::fmt;

/// Target Adyen environment.
///
/// Live endpoints are account specific: the payment API host is built from
/// the merchant's live URL prefix (`{prefix}-pal-live.adyenpayments.com`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Test,
    Live { url_prefix: String },
}

impl Environment {
    pub fn live(url_prefix: impl Into<String>) -> Self {
        Environment::Live {
            url_prefix: url_prefix.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live { .. })
    }
}

/// API credentials.
///
/// Web-service users authenticate with HTTP basic auth. Merchants that use
/// the hosted payment pages additionally hold the skin's HMAC key, which is
/// only needed to sign HPP form fields.
///
/// Users can be managed at https://ca-test.adyen.com/ca/ca/config/users.shtml
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic {
        environment: Environment,
        username: String,
        password: String,
    },
    BasicWithHmac {
        environment: Environment,
        username: String,
        password: String,
        hmac_key: String,
    },
}

impl Credentials {
    /// Credentials for API calls only
    pub fn basic(
        environment: Environment,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credentials::Basic {
            environment,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials for API calls plus HPP signing (hex encoded HMAC key)
    pub fn with_hmac(
        environment: Environment,
        username: impl Into<String>,
        password: impl Into<String>,
        hmac_key: impl Into<String>,
    ) -> Self {
        Credentials::BasicWithHmac {
            environment,
            username: username.into(),
            password: password.into(),
            hmac_key: hmac_key.into(),
        }
    }

    pub fn environment(&self) -> &Environment {
        match self {
            Credentials::Basic { environment, .. }
            | Credentials::BasicWithHmac { environment, .. } => environment,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Credentials::Basic { username, .. } | Credentials::BasicWithHmac { username, .. } => {
                username
            }
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Credentials::Basic { password, .. } | Credentials::BasicWithHmac { password, .. } => {
                password
            }
        }
    }

    pub fn hmac_key(&self) -> Option<&str> {
        match self {
            Credentials::Basic { .. } => None,
            Credentials::BasicWithHmac { hmac_key, .. } => Some(hmac_key),
        }
    }
}

// Secrets never show up in logs or panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Credentials::Basic { .. } => "Basic",
            Credentials::BasicWithHmac { .. } => "BasicWithHmac",
        };
        f.debug_struct(kind)
            .field("environment", self.environment())
            .field("username", &self.username())
            .field("password", &"<redacted>")
            .field("hmac_key", &self.hmac_key().map(|_| "<redacted>"))
            .finish()
    }
}
