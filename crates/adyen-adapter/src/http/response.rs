/*
[INPUT]:  Buffered HTTP response (status, headers, body bytes)
[OUTPUT]: ProviderResponse wrapper with typed decoding and status mapping
[POS]:    HTTP layer - per-call response container
[UPDATE]: When changing how responses are decoded or rejected
*/

use std::borrow::Cow;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::http::{AdyenError, Result};

/// Raw answer to a single API call
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ProviderResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx answer into [`AdyenError::Api`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AdyenError::api_error(self.status, self.text()))
        }
    }

    /// Decode the body as JSON
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ModificationResponse, ModificationResult};

    #[test]
    fn test_success_passes_through() {
        let body = br#"{"pspReference":"881","response":"[capture-received]"}"#.to_vec();
        let response = ProviderResponse::new(StatusCode::OK, HeaderMap::new(), body.clone())
            .error_for_status()
            .expect("2xx should not be an error");

        assert_eq!(response.body(), body.as_slice());
        let decoded: ModificationResponse = response.decode().unwrap();
        assert_eq!(decoded.response, ModificationResult::CaptureReceived);
    }

    #[test]
    fn test_non_success_becomes_api_error() {
        let response = ProviderResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            HeaderMap::new(),
            br#"{"status":422,"message":"Invalid amount"}"#.to_vec(),
        );

        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.details().map(|d| d.message.as_str()), Some("Invalid amount"));
    }

    #[test]
    fn test_decode_failure_is_serialization_error() {
        let response =
            ProviderResponse::new(StatusCode::OK, HeaderMap::new(), b"not json".to_vec());

        let err = response.decode::<ModificationResponse>().unwrap_err();
        assert!(matches!(err, AdyenError::Serialization(_)));
    }
}
