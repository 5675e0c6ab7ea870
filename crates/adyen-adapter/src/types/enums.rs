/*
[INPUT]:  Adyen payment API schema (v25) and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Outcome of an authorisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    Authorised,
    Refused,
    Error,
    Cancelled,
    Received,
    Pending,
    RedirectShopper,
    IdentifyShopper,
    ChallengeShopper,
    #[serde(other)]
    Unknown,
}

impl ResultCode {
    pub fn is_authorised(&self) -> bool {
        matches!(self, ResultCode::Authorised)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopperInteraction {
    Ecommerce,
    ContAuth,
    Moto,
    #[serde(rename = "POS")]
    Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringContract {
    #[serde(rename = "ONECLICK")]
    OneClick,
    #[serde(rename = "RECURRING")]
    Recurring,
    #[serde(rename = "ONECLICK,RECURRING")]
    OneClickRecurring,
    #[serde(rename = "PAYOUT")]
    Payout,
}

/// Acknowledgement returned by modification endpoints.
///
/// Modifications are processed asynchronously; the final outcome arrives by
/// notification, so this only confirms receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModificationResult {
    #[serde(rename = "[capture-received]")]
    CaptureReceived,
    #[serde(rename = "[cancel-received]")]
    CancelReceived,
    #[serde(rename = "[refund-received]")]
    RefundReceived,
    #[serde(rename = "[cancelOrRefund-received]")]
    CancelOrRefundReceived,
    #[serde(other)]
    Unknown,
}
