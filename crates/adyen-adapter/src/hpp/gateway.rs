/*
[INPUT]:  HppRequest and the client's HMAC credentials
[OUTPUT]: Signed redirect URLs and directory lookup results
[POS]:    HPP layer - hosted payment page endpoints
[UPDATE]: When adding new HPP pages
*/

use std::collections::BTreeMap;

use reqwest::Url;

use crate::hpp::{HmacSigner, HppRequest, MERCHANT_SIG_FIELD};
use crate::http::{AdyenClient, AdyenError, Result};
use crate::types::DirectoryLookupResponse;

const DIRECTORY_PAGE: &str = "directory.shtml";
const SELECT_PAGE: &str = "select.shtml";
const PAY_PAGE: &str = "pay.shtml";
const SKIP_DETAILS_PAGE: &str = "skipDetails.shtml";

/// Hosted payment page operations, obtained from [`AdyenClient::hpp`]
#[derive(Debug)]
pub struct HppGateway<'a> {
    client: &'a AdyenClient,
    signer: HmacSigner,
}

impl<'a> HppGateway<'a> {
    /// Fails unless the client holds HMAC credentials
    pub fn new(client: &'a AdyenClient) -> Result<Self> {
        let hmac_key = client.credentials().hmac_key().ok_or_else(|| {
            AdyenError::Config("hosted payment pages require HMAC credentials".to_string())
        })?;
        Ok(Self {
            client,
            signer: HmacSigner::from_hex(hmac_key)?,
        })
    }

    /// Add `merchantSig` to the given fields, replacing any stale one
    pub fn sign(&self, mut fields: BTreeMap<String, String>) -> BTreeMap<String, String> {
        fields.remove(MERCHANT_SIG_FIELD);
        let signature = self.signer.sign(&fields);
        fields.insert(MERCHANT_SIG_FIELD.to_string(), signature);
        fields
    }

    /// Signed form fields for a session
    pub fn signed_fields(&self, req: &HppRequest) -> Result<BTreeMap<String, String>> {
        Ok(self.sign(req.to_fields(self.client.config())?))
    }

    /// Payment methods available for the session
    ///
    /// POST /hpp/directory.shtml (form encoded)
    pub async fn directory_lookup(&self, req: &HppRequest) -> Result<DirectoryLookupResponse> {
        let fields = self.signed_fields(req)?;
        let url = self.client.hpp_url(DIRECTORY_PAGE)?;
        self.client
            .post_form(DIRECTORY_PAGE, url, &fields)
            .await?
            .decode()
    }

    /// Multi-page payment flow, shopper picks the payment method
    pub fn select_url(&self, req: &HppRequest) -> Result<Url> {
        self.page_url(SELECT_PAGE, req)
    }

    /// One-page payment flow
    pub fn pay_url(&self, req: &HppRequest) -> Result<Url> {
        self.page_url(PAY_PAGE, req)
    }

    /// Redirect straight to the method given by `brand_code` (and `issuer_id`)
    pub fn skip_details_url(&self, req: &HppRequest) -> Result<Url> {
        if req.brand_code.is_none() {
            return Err(AdyenError::Config(
                "skipDetails requires a brand code".to_string(),
            ));
        }
        self.page_url(SKIP_DETAILS_PAGE, req)
    }

    fn page_url(&self, page: &str, req: &HppRequest) -> Result<Url> {
        let fields = self.signed_fields(req)?;
        let mut url = self.client.hpp_url(page)?;
        url.query_pairs_mut().extend_pairs(fields.iter());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, Environment};
    use crate::http::{ClientConfig, Endpoints};
    use chrono::{TimeZone, Utc};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48";

    fn config() -> ClientConfig {
        ClientConfig {
            merchant_account: Some("TestMerchant".to_string()),
            skin_code: Some("X7hsNDWp".to_string()),
            ..ClientConfig::default()
        }
    }

    fn hmac_client(endpoints: Endpoints) -> AdyenClient {
        AdyenClient::with_config_and_endpoints(
            Credentials::with_hmac(Environment::Test, "u", "p", TEST_KEY),
            config(),
            endpoints,
        )
        .expect("client init")
    }

    fn request() -> HppRequest {
        let mut req = HppRequest::new("order:1", 1000);
        req.session_validity = Some(Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap());
        req.shopper_locale = Some("en_GB".to_string());
        req
    }

    #[test]
    fn test_hpp_requires_hmac_credentials() {
        let client = AdyenClient::with_config(
            Credentials::basic(Environment::Test, "u", "p"),
            config(),
        )
        .unwrap();

        assert!(matches!(client.hpp(), Err(AdyenError::Config(_))));
    }

    #[test]
    fn test_signed_fields_match_known_signature() {
        let client = hmac_client(Endpoints::for_environment(&Environment::Test));
        let fields = client.hpp().unwrap().signed_fields(&request()).unwrap();

        assert_eq!(
            fields[MERCHANT_SIG_FIELD],
            "Pfb7+6VTRmvSKe5SXHgBlBwVRuAPr/U6SHYRBY7nqm4="
        );
    }

    #[test]
    fn test_sign_replaces_stale_signature() {
        let client = hmac_client(Endpoints::for_environment(&Environment::Test));
        let hpp = client.hpp().unwrap();
        let mut fields = request().to_fields(client.config()).unwrap();
        let fresh = hpp.sign(fields.clone());
        fields.insert(MERCHANT_SIG_FIELD.to_string(), "stale".to_string());

        assert_eq!(hpp.sign(fields), fresh);
    }

    #[test]
    fn test_select_url_carries_signed_query() {
        let client = hmac_client(Endpoints::for_environment(&Environment::Test));
        let url = client.hpp().unwrap().select_url(&request()).unwrap();

        assert_eq!(url.path(), "/hpp/select.shtml");
        let query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(query["merchantReference"], "order:1");
        assert_eq!(
            query[MERCHANT_SIG_FIELD],
            "Pfb7+6VTRmvSKe5SXHgBlBwVRuAPr/U6SHYRBY7nqm4="
        );
    }

    #[test]
    fn test_skip_details_requires_brand_code() {
        let client = hmac_client(Endpoints::for_environment(&Environment::Test));
        let hpp = client.hpp().unwrap();

        assert!(matches!(
            hpp.skip_details_url(&request()),
            Err(AdyenError::Config(_))
        ));

        let mut req = request();
        req.brand_code = Some("ideal".to_string());
        let url = hpp.skip_details_url(&req).unwrap();
        assert_eq!(url.path(), "/hpp/skipDetails.shtml");
    }

    #[tokio::test]
    async fn test_directory_lookup() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hpp/directory.shtml"))
            .and(body_string_contains("merchantSig="))
            .and(body_string_contains("skinCode=X7hsNDWp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "paymentMethods": [
                    {"brandCode": "ideal", "name": "iDEAL", "issuers": [
                        {"issuerId": "1121", "name": "Test Issuer"}
                    ]},
                    {"brandCode": "visa", "name": "VISA"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = hmac_client(Endpoints::with_host(&server.uri()));
        let response = client
            .hpp()
            .unwrap()
            .directory_lookup(&request())
            .await
            .expect("directory_lookup failed");

        assert_eq!(response.payment_methods.len(), 2);
        assert_eq!(response.payment_methods[0].issuers[0].issuer_id, "1121");
    }

    #[tokio::test]
    async fn test_directory_lookup_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hpp/directory.shtml"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&server)
            .await;

        let client = hmac_client(Endpoints::with_host(&server.uri()));
        let err = client
            .hpp()
            .unwrap()
            .directory_lookup(&request())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some("Forbidden"));
    }
}
