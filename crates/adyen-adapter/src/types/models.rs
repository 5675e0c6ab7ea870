/*
[INPUT]:  Adyen payment API schema (v25) and serde requirements
[OUTPUT]: Shared building blocks for requests and responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::RecurringContract;

/// Monetary amount in minor units (1000 EUR cents = 10.00 EUR)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: i64,
    pub currency: String,
}

impl Amount {
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

/// Raw card details (PCI scope; prefer client-side encryption)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvc: String,
    pub holder_name: String,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4 = self
            .number
            .get(self.number.len().saturating_sub(4)..)
            .unwrap_or_default();
        f.debug_struct("Card")
            .field("number", &format!("****{last4}"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvc", &"***")
            .field("holder_name", &self.holder_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub user_agent: String,
    pub accept_header: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    pub contract: RecurringContract,
}

/// Payment method offered on the hosted payment pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub brand_code: String,
    pub name: String,
    #[serde(default)]
    pub issuers: Vec<Issuer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub issuer_id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_wire_format() {
        let amount = Amount::new(1000, "EUR");
        assert_eq!(
            serde_json::to_string(&amount).unwrap(),
            r#"{"value":1000,"currency":"EUR"}"#
        );
    }

    #[test]
    fn test_card_debug_masks_pan_and_cvc() {
        let card = Card {
            number: "4111111111111111".to_string(),
            expiry_month: "03".to_string(),
            expiry_year: "2030".to_string(),
            cvc: "737".to_string(),
            holder_name: "John Smith".to_string(),
        };
        let rendered = format!("{card:?}");

        assert!(rendered.contains("****1111"));
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("737"));
    }

    #[test]
    fn test_payment_method_without_issuers() {
        let method: PaymentMethod =
            serde_json::from_str(r#"{"brandCode":"visa","name":"VISA"}"#).unwrap();
        assert!(method.issuers.is_empty());
    }
}
