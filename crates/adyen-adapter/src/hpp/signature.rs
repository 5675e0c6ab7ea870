/*
[INPUT]:  Hex encoded skin HMAC key and HPP form fields
[OUTPUT]: Base64 HMAC-SHA256 merchant signatures (merchantSig)
[POS]:    HPP layer - form field signing
[UPDATE]: When changing the signing string format or algorithm
*/

use std::collections::BTreeMap;
use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{AdyenError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Form field that carries the signature itself
pub const MERCHANT_SIG_FIELD: &str = "merchantSig";

/// Signs hosted payment page fields with the skin's HMAC key
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha256,
}

impl HmacSigner {
    /// Create a signer from the hex key shown in the skin configuration
    pub fn from_hex(hmac_key: &str) -> Result<Self> {
        let key = hex::decode(hmac_key.trim())
            .map_err(|e| AdyenError::Signature(format!("HMAC key is not valid hex: {e}")))?;
        if key.is_empty() {
            return Err(AdyenError::Signature("HMAC key is empty".to_string()));
        }
        let mac = HmacSha256::new_from_slice(&key)
            .map_err(|e| AdyenError::Signature(format!("HMAC key rejected: {e}")))?;
        Ok(Self { mac })
    }

    /// Build the string that gets signed.
    ///
    /// Format: "{key1}:{key2}:...:{value1}:{value2}:..." with keys in sorted
    /// order, `merchantSig` left out, and `\` / `:` escaped in every part.
    pub fn signing_string(fields: &BTreeMap<String, String>) -> String {
        let (keys, values): (Vec<String>, Vec<String>) = fields
            .iter()
            .filter(|(key, _)| key.as_str() != MERCHANT_SIG_FIELD)
            .map(|(key, value)| (escape(key), escape(value)))
            .unzip();

        let mut parts = keys;
        parts.extend(values);
        parts.join(":")
    }

    /// Sign fields; returns the base64 encoded signature
    pub fn sign(&self, fields: &BTreeMap<String, String>) -> String {
        let mut mac = self.mac.clone();
        mac.update(Self::signing_string(fields).as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Check a base64 signature in constant time
    pub fn verify(&self, fields: &BTreeMap<String, String>, signature: &str) -> bool {
        let Ok(expected) = BASE64.decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(Self::signing_string(fields).as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("key", &"<redacted>")
            .finish()
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace(':', "\\:")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48";

    fn sample_fields() -> BTreeMap<String, String> {
        [
            ("merchantAccount", "TestMerchant"),
            ("currencyCode", "EUR"),
            ("paymentAmount", "1000"),
            ("merchantReference", "order:1"),
            ("skinCode", "X7hsNDWp"),
            ("sessionValidity", "2026-01-01T10:00:00Z"),
            ("shopperLocale", "en_GB"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_signing_string_sorts_and_escapes() {
        assert_eq!(
            HmacSigner::signing_string(&sample_fields()),
            "currencyCode:merchantAccount:merchantReference:paymentAmount:sessionValidity:\
             shopperLocale:skinCode:EUR:TestMerchant:order\\:1:1000:2026-01-01T10\\:00\\:00Z:\
             en_GB:X7hsNDWp"
        );
    }

    #[test]
    fn test_signing_string_ignores_existing_signature() {
        let mut fields = sample_fields();
        let unsigned = HmacSigner::signing_string(&fields);
        fields.insert(MERCHANT_SIG_FIELD.to_string(), "stale".to_string());

        assert_eq!(HmacSigner::signing_string(&fields), unsigned);
    }

    #[test]
    fn test_escape_backslash_before_colon() {
        assert_eq!(escape(r"a\b:c"), r"a\\b\:c");
    }

    #[test]
    fn test_sign_known_vector() {
        let signer = HmacSigner::from_hex(TEST_KEY).unwrap();
        let signature = signer.sign(&sample_fields());

        assert_eq!(signature, "Pfb7+6VTRmvSKe5SXHgBlBwVRuAPr/U6SHYRBY7nqm4=");
        assert!(signer.verify(&sample_fields(), &signature));
    }

    #[test]
    fn test_verify_rejects_tampered_fields() {
        let signer = HmacSigner::from_hex(TEST_KEY).unwrap();
        let signature = signer.sign(&sample_fields());

        let mut tampered = sample_fields();
        tampered.insert("paymentAmount".to_string(), "1".to_string());
        assert!(!signer.verify(&tampered, &signature));
        assert!(!signer.verify(&sample_fields(), "not base64!"));
    }

    #[test]
    fn test_invalid_hex_key() {
        assert!(matches!(
            HmacSigner::from_hex("not-hex"),
            Err(AdyenError::Signature(_))
        ));
        assert!(matches!(HmacSigner::from_hex(""), Err(AdyenError::Signature(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let signer = HmacSigner::from_hex(TEST_KEY).unwrap();
        assert!(!format!("{signer:?}").contains("4468"));
    }
}
