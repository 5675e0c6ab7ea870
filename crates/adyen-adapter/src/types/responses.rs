/*
[INPUT]:  Adyen payment API schema (v25) and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{ModificationResult, ResultCode};
use super::models::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseResponse {
    pub psp_reference: String,
    pub result_code: ResultCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<BTreeMap<String, String>>,
    // 3-D Secure redirect data, present when result_code is RedirectShopper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pa_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationResponse {
    pub psp_reference: String,
    pub response: ModificationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<BTreeMap<String, String>>,
}

/// Error object Adyen returns with non-2xx statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetails {
    pub status: u16,
    #[serde(default)]
    pub error_code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub psp_reference: Option<String>,
}

/// Response of the HPP directory lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLookupResponse {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorise_response_redirect() {
        let response: AuthoriseResponse = serde_json::from_str(
            r#"{
                "pspReference": "8514836072314693",
                "resultCode": "RedirectShopper",
                "md": "31h..........vOXek7w=",
                "paRequest": "eNpVUtt.....Rc7HNA==",
                "issuerUrl": "https://test.adyen.com/hpp/3d/validate.shtml"
            }"#,
        )
        .unwrap();

        assert_eq!(response.result_code, ResultCode::RedirectShopper);
        assert_eq!(
            response.issuer_url.as_deref(),
            Some("https://test.adyen.com/hpp/3d/validate.shtml")
        );
        assert!(response.auth_code.is_none());
    }

    #[test]
    fn test_api_error_details() {
        let details: ApiErrorDetails = serde_json::from_str(
            r#"{"status":422,"errorCode":"167","message":"Original pspReference required for this operation","errorType":"validation"}"#,
        )
        .unwrap();

        assert_eq!(details.status, 422);
        assert_eq!(details.error_code.as_deref(), Some("167"));
        assert!(details.psp_reference.is_none());
    }
}
