/*
[INPUT]:  Hosted payment page session parameters and client configuration
[OUTPUT]: Unsigned HPP form fields
[POS]:    HPP layer - form field model
[UPDATE]: When adding new HPP fields
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::http::{AdyenError, ClientConfig, Result};

/// Lifetime of a payment session when none is given
pub const DEFAULT_SESSION_VALIDITY_SECS: i64 = 60 * 60;

/// Parameters of a hosted payment page session.
///
/// Currency, merchant account and skin code fall back to the client
/// configuration when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HppRequest {
    pub merchant_reference: String,
    pub payment_amount: i64,
    pub currency_code: Option<String>,
    pub merchant_account: Option<String>,
    pub skin_code: Option<String>,
    pub session_validity: Option<DateTime<Utc>>,
    pub ship_before_date: Option<NaiveDate>,
    pub country_code: Option<String>,
    pub shopper_locale: Option<String>,
    pub shopper_email: Option<String>,
    pub shopper_reference: Option<String>,
    /// Payment method to skip straight to (skipDetails)
    pub brand_code: Option<String>,
    pub issuer_id: Option<String>,
    pub res_url: Option<String>,
}

impl HppRequest {
    pub fn new(merchant_reference: impl Into<String>, payment_amount: i64) -> Self {
        Self {
            merchant_reference: merchant_reference.into(),
            payment_amount,
            currency_code: None,
            merchant_account: None,
            skin_code: None,
            session_validity: None,
            ship_before_date: None,
            country_code: None,
            shopper_locale: None,
            shopper_email: None,
            shopper_reference: None,
            brand_code: None,
            issuer_id: None,
            res_url: None,
        }
    }

    /// Form fields, without signature
    pub fn to_fields(&self, config: &ClientConfig) -> Result<BTreeMap<String, String>> {
        let merchant_account = self
            .merchant_account
            .as_ref()
            .or(config.merchant_account.as_ref())
            .ok_or_else(|| AdyenError::Config("merchant account is required for HPP".to_string()))?;
        let skin_code = self
            .skin_code
            .as_ref()
            .or(config.skin_code.as_ref())
            .ok_or_else(|| AdyenError::Config("skin code is required for HPP".to_string()))?;
        let currency_code = self.currency_code.as_ref().unwrap_or(&config.currency);
        let session_validity = self
            .session_validity
            .unwrap_or_else(|| Utc::now() + Duration::seconds(DEFAULT_SESSION_VALIDITY_SECS));

        let mut fields = BTreeMap::new();
        fields.insert("merchantReference".to_string(), self.merchant_reference.clone());
        fields.insert("paymentAmount".to_string(), self.payment_amount.to_string());
        fields.insert("currencyCode".to_string(), currency_code.clone());
        fields.insert("merchantAccount".to_string(), merchant_account.clone());
        fields.insert("skinCode".to_string(), skin_code.clone());
        fields.insert(
            "sessionValidity".to_string(),
            session_validity.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );

        let optional = [
            ("shipBeforeDate", self.ship_before_date.map(|d| d.format("%Y-%m-%d").to_string())),
            ("countryCode", self.country_code.clone()),
            ("shopperLocale", self.shopper_locale.clone()),
            ("shopperEmail", self.shopper_email.clone()),
            ("shopperReference", self.shopper_reference.clone()),
            ("brandCode", self.brand_code.clone()),
            ("issuerId", self.issuer_id.clone()),
            ("resURL", self.res_url.clone()),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.insert(name.to_string(), value);
            }
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config() -> ClientConfig {
        ClientConfig {
            merchant_account: Some("TestMerchant".to_string()),
            skin_code: Some("X7hsNDWp".to_string()),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_fields_fall_back_to_config() {
        let mut req = HppRequest::new("order-1", 1000);
        req.session_validity = Some(Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap());
        let fields = req.to_fields(&config()).unwrap();

        assert_eq!(fields["merchantAccount"], "TestMerchant");
        assert_eq!(fields["skinCode"], "X7hsNDWp");
        assert_eq!(fields["currencyCode"], "EUR");
        assert_eq!(fields["paymentAmount"], "1000");
        assert_eq!(fields["sessionValidity"], "2026-01-01T10:00:00Z");
        assert!(!fields.contains_key("brandCode"));
    }

    #[test]
    fn test_optional_fields_are_included() {
        let mut req = HppRequest::new("order-2", 250);
        req.ship_before_date = NaiveDate::from_ymd_opt(2026, 2, 1);
        req.brand_code = Some("ideal".to_string());
        req.issuer_id = Some("1121".to_string());
        req.res_url = Some("https://shop.example/result".to_string());
        let fields = req.to_fields(&config()).unwrap();

        assert_eq!(fields["shipBeforeDate"], "2026-02-01");
        assert_eq!(fields["brandCode"], "ideal");
        assert_eq!(fields["issuerId"], "1121");
        assert_eq!(fields["resURL"], "https://shop.example/result");
    }

    #[test]
    fn test_default_session_validity_is_in_the_future() {
        let fields = HppRequest::new("order-3", 1).to_fields(&config()).unwrap();
        let validity = DateTime::parse_from_rfc3339(&fields["sessionValidity"]).unwrap();

        assert!(validity.with_timezone(&Utc) > Utc::now());
    }

    #[test]
    fn test_missing_skin_code_is_config_error() {
        let config = ClientConfig {
            merchant_account: Some("TestMerchant".to_string()),
            ..ClientConfig::default()
        };

        assert!(matches!(
            HppRequest::new("order-4", 1).to_fields(&config),
            Err(AdyenError::Config(_))
        ));
    }
}
