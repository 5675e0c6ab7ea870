/*
[INPUT]:  Endpoint name and serializable payload
[OUTPUT]: Buffered ProviderResponse or AdyenError (transport / API / serialization)
[POS]:    HTTP layer - single-attempt request execution with basic auth
[UPDATE]: When changing request headers, logging, or status handling
*/

use std::collections::BTreeMap;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::hpp::MERCHANT_SIG_FIELD;
use crate::http::{AdyenClient, AdyenError, ProviderResponse, Result};

impl AdyenClient {
    /// Serialize `payload` and POST it to the payment endpoint `endpoint`.
    ///
    /// One attempt only: transport failures and non-2xx answers are returned
    /// to the caller as errors, after the response body has been read.
    pub async fn execute<P>(&self, endpoint: &str, payload: &P) -> Result<ProviderResponse>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;
        if body.first() != Some(&b'{') {
            return Err(AdyenError::InvalidPayload(format!(
                "{endpoint} payload must encode to a JSON object"
            )));
        }

        let url = self.payment_url(endpoint)?;
        debug!(
            target: "adyen_adapter::traffic",
            endpoint,
            url = %url,
            body = %masked_json(&body),
            "[Request]"
        );

        let response = self
            .http_client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.password()),
            )
            .body(body)
            .send()
            .await?;

        read_response(endpoint, &url, response).await
    }

    /// [`execute`](Self::execute) and decode the success body
    pub async fn execute_json<P, T>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(endpoint, payload).await?.decode()
    }

    /// POST url-encoded form fields (hosted payment pages take no basic auth)
    pub(crate) async fn post_form(
        &self,
        page: &str,
        url: Url,
        fields: &BTreeMap<String, String>,
    ) -> Result<ProviderResponse> {
        debug!(
            target: "adyen_adapter::traffic",
            endpoint = page,
            url = %url,
            body = %masked_form(fields),
            "[Request]"
        );

        let response = self.http_client.post(url.clone()).form(fields).send().await?;
        read_response(page, &url, response).await
    }
}

async fn read_response(endpoint: &str, url: &Url, response: Response) -> Result<ProviderResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    debug!(
        target: "adyen_adapter::traffic",
        endpoint,
        url = %url,
        status = status.as_u16(),
        body = %String::from_utf8_lossy(&body),
        "[Response]"
    );

    ProviderResponse::new(status, headers, body).error_for_status()
}

/// JSON body as written to the traffic log, card number and cvc masked
fn masked_json(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            mask_card(&mut value);
            value.to_string()
        }
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

fn mask_card(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(card)) = map.get_mut("card") {
                if let Some(Value::String(number)) = card.get_mut("number") {
                    let last4 = number.get(number.len().saturating_sub(4)..).unwrap_or_default();
                    *number = format!("****{last4}");
                }
                if let Some(cvc) = card.get_mut("cvc") {
                    *cvc = Value::String("***".to_string());
                }
            }
            map.values_mut().for_each(mask_card);
        }
        Value::Array(items) => items.iter_mut().for_each(mask_card),
        _ => {}
    }
}

/// Url-encoded form body as written to the traffic log, without the signature
fn masked_form(fields: &BTreeMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().filter(|(key, _)| key.as_str() != MERCHANT_SIG_FIELD))
        .finish()
}
