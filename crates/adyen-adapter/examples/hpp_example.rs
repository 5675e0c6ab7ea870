/*
[INPUT]:  Credentials with skin HMAC key, client id, skin code
[OUTPUT]: CSE script URL, signed HPP redirect URL, available payment methods
[POS]:    Examples - hosted payment pages
[UPDATE]: When HPP API changes
*/

use adyen_adapter::*;

/// Example: Hosted payment pages
///
/// No card data touches the merchant server: the shopper is redirected to a
/// signed Adyen page, or card fields are encrypted in the browser by the CSE
/// script.
#[tokio::main]
async fn main() {
    println!("=== Adyen HPP Example ===\n");

    let credentials = Credentials::with_hmac(
        Environment::Test,
        "ws@Company.YourCompany",
        "password",
        "4468D9782DEF54FCD706C9100C71EC43932B1EBC2ACF6BA0560C05AAA7550C48",
    );
    let config = ClientConfig {
        merchant_account: Some("YourMerchantAccount".to_string()),
        client_id: Some("YourClientId".to_string()),
        skin_code: Some("YourSkinCode".to_string()),
        ..ClientConfig::default()
    };

    let client = match AdyenClient::with_config(credentials, config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.client_url() {
        Ok(url) => println!("✓ CSE script: {}", url),
        Err(e) => println!("✗ Error: {}", e),
    }

    let hpp = match client.hpp() {
        Ok(hpp) => hpp,
        Err(e) => {
            eprintln!("HPP unavailable: {}", e);
            return;
        }
    };

    let mut req = HppRequest::new("example-order-2", 1000);
    req.country_code = Some("NL".to_string());
    req.shopper_locale = Some("nl_NL".to_string());

    match hpp.select_url(&req) {
        Ok(url) => println!("✓ Redirect shopper to: {}", url),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nLooking up payment methods...");
    match hpp.directory_lookup(&req).await {
        Ok(directory) => {
            for method in directory.payment_methods {
                println!("  - {} ({})", method.name, method.brand_code);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ HPP example complete");
}
