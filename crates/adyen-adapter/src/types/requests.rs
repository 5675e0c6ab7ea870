/*
[INPUT]:  Adyen payment API schema (v25) and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::ShopperInteraction;
use super::models::{Amount, BrowserInfo, Card, Recurring};

/// Additional data key carrying client-side encrypted card data
pub const ENCRYPTED_CARD_KEY: &str = "card.encrypted.json";

/// POST /authorise
///
/// `merchant_account` is filled from the client configuration when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseRequest {
    pub amount: Amount,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(rename = "shopperIP")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<ShopperInteraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_recurring_detail_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<BTreeMap<String, String>>,
}

impl AuthoriseRequest {
    pub fn new(reference: impl Into<String>, amount: Amount) -> Self {
        Self {
            amount,
            reference: reference.into(),
            merchant_account: None,
            card: None,
            shopper_reference: None,
            shopper_email: None,
            shopper_ip: None,
            shopper_interaction: None,
            recurring: None,
            selected_recurring_detail_reference: None,
            browser_info: None,
            additional_data: None,
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }
}

/// Authorisation with card data encrypted by the hosted CSE library.
///
/// Sent to the same endpoint as [`AuthoriseRequest`]; the encrypted blob
/// travels as additional data.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoriseEncryptedRequest {
    pub amount: Amount,
    pub reference: String,
    pub encrypted_card: String,
    pub merchant_account: Option<String>,
    pub shopper_reference: Option<String>,
    pub shopper_email: Option<String>,
    pub shopper_ip: Option<String>,
    pub recurring: Option<Recurring>,
    pub browser_info: Option<BrowserInfo>,
}

impl AuthoriseEncryptedRequest {
    pub fn new(
        reference: impl Into<String>,
        amount: Amount,
        encrypted_card: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            reference: reference.into(),
            encrypted_card: encrypted_card.into(),
            merchant_account: None,
            shopper_reference: None,
            shopper_email: None,
            shopper_ip: None,
            recurring: None,
            browser_info: None,
        }
    }
}

impl From<AuthoriseEncryptedRequest> for AuthoriseRequest {
    fn from(req: AuthoriseEncryptedRequest) -> Self {
        let mut additional_data = BTreeMap::new();
        additional_data.insert(ENCRYPTED_CARD_KEY.to_string(), req.encrypted_card);

        Self {
            merchant_account: req.merchant_account,
            shopper_reference: req.shopper_reference,
            shopper_email: req.shopper_email,
            shopper_ip: req.shopper_ip,
            recurring: req.recurring,
            browser_info: req.browser_info,
            additional_data: Some(additional_data),
            ..AuthoriseRequest::new(req.reference, req.amount)
        }
    }
}

/// POST /authorise3d - completes a 3-D Secure 1 authorisation after the
/// shopper returns from the issuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorise3dRequest {
    pub md: String,
    pub pa_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(rename = "shopperIP")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// POST /capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    pub modification_amount: Amount,
    pub original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CaptureRequest {
    pub fn new(original_reference: impl Into<String>, modification_amount: Amount) -> Self {
        Self {
            merchant_account: None,
            modification_amount,
            original_reference: original_reference.into(),
            reference: None,
        }
    }
}

/// POST /refund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    pub modification_amount: Amount,
    pub original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl RefundRequest {
    pub fn new(original_reference: impl Into<String>, modification_amount: Amount) -> Self {
        Self {
            merchant_account: None,
            modification_amount,
            original_reference: original_reference.into(),
            reference: None,
        }
    }
}

/// POST /cancel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    pub original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CancelRequest {
    pub fn new(original_reference: impl Into<String>) -> Self {
        Self {
            merchant_account: None,
            original_reference: original_reference.into(),
            reference: None,
        }
    }
}

/// POST /cancelOrRefund - cancels if not yet captured, refunds otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    pub original_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CancelOrRefundRequest {
    pub fn new(original_reference: impl Into<String>) -> Self {
        Self {
            merchant_account: None,
            original_reference: original_reference.into(),
            reference: None,
        }
    }
}
