/*
[INPUT]:  Web-service user credentials (test environment)
[OUTPUT]: Authorisation followed by capture and refund
[POS]:    Examples - payment and modification operations
[UPDATE]: When payment or modification API changes
*/

use adyen_adapter::*;

/// Example: Authorise a card payment, then capture and refund it
///
/// Replace the placeholder credentials with a web-service user from the
/// Adyen test Customer Area before running.
#[tokio::main]
async fn main() {
    println!("=== Adyen Payment Example ===\n");

    let credentials = Credentials::basic(Environment::Test, "ws@Company.YourCompany", "password");
    let config = ClientConfig {
        merchant_account: Some("YourMerchantAccount".to_string()),
        ..ClientConfig::default()
    };

    let client = match AdyenClient::with_config(credentials, config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (currency: {})\n", client.currency());

    let req = AuthoriseRequest::new("example-order-1", client.amount(1000)).with_card(Card {
        number: "4111111111111111".to_string(),
        expiry_month: "03".to_string(),
        expiry_year: "2030".to_string(),
        cvc: "737".to_string(),
        holder_name: "John Smith".to_string(),
    });

    println!("Authorising {:?}...", req.amount);
    let authorised = match client.payment().authorise(req).await {
        Ok(response) => {
            println!("✓ Authorise: {:?}", response);
            response
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    if !authorised.result_code.is_authorised() {
        println!("Payment not authorised, nothing to capture");
        return;
    }

    println!("\nCapturing {}...", authorised.psp_reference);
    let capture = CaptureRequest::new(authorised.psp_reference.clone(), client.amount(1000));
    match client.modification().capture(capture).await {
        Ok(response) => println!("✓ Capture: {:?}", response),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nRefunding {}...", authorised.psp_reference);
    let refund = RefundRequest::new(authorised.psp_reference, client.amount(1000));
    match client.modification().refund(refund).await {
        Ok(response) => println!("✓ Refund: {:?}", response),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Payment example complete");
}
