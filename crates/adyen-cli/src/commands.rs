/*
[INPUT]:  Parsed CLI arguments and a configured AdyenClient
[OUTPUT]: Command output (pretty JSON or URL)
[POS]:    CLI command layer - maps subcommands onto gateway calls
[UPDATE]: When adding new subcommands
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use adyen_adapter::{
    AdyenClient, AuthoriseRequest, CancelOrRefundRequest, CancelRequest, CaptureRequest, Card,
    HppRequest, RefundRequest,
};

#[derive(Parser, Debug)]
#[command(name = "adyen-cli", version, about = "Adyen payment API command line client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the configuration and exit
    CheckConfig,
    /// Print the client-side encryption script URL
    ClientUrl,
    /// Authorise a card payment
    Authorise {
        /// Merchant reference; generated when omitted
        #[arg(long)]
        reference: Option<String>,
        /// Amount in minor units of the configured currency
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        card_number: String,
        #[arg(long)]
        expiry_month: String,
        #[arg(long)]
        expiry_year: String,
        #[arg(long)]
        cvc: String,
        #[arg(long)]
        holder: String,
    },
    /// Capture an authorised payment
    Capture {
        #[arg(long)]
        original_reference: String,
        #[arg(long)]
        amount: i64,
    },
    /// Refund a captured payment
    Refund {
        #[arg(long)]
        original_reference: String,
        #[arg(long)]
        amount: i64,
    },
    /// Cancel an uncaptured payment
    Cancel {
        #[arg(long)]
        original_reference: String,
    },
    /// Cancel if uncaptured, refund otherwise
    CancelOrRefund {
        #[arg(long)]
        original_reference: String,
    },
    /// Print a signed hosted payment page URL
    HppUrl {
        #[arg(long)]
        reference: Option<String>,
        #[arg(long)]
        amount: i64,
        /// Skip method selection and go straight to this brand
        #[arg(long)]
        brand_code: Option<String>,
    },
}

/// Execute one command; returns what should be printed
pub async fn run(command: Command, client: &AdyenClient) -> Result<String> {
    match command {
        Command::CheckConfig => {
            info!(
                environment = ?client.credentials().environment(),
                hpp = client.credentials().hmac_key().is_some(),
                "configuration valid"
            );
            Ok("configuration OK".to_string())
        }
        Command::ClientUrl => client.client_url().context("build client url"),
        Command::Authorise {
            reference,
            amount,
            card_number,
            expiry_month,
            expiry_year,
            cvc,
            holder,
        } => {
            let reference = reference.unwrap_or_else(generate_reference);
            info!(%reference, amount, "authorising payment");
            let req = AuthoriseRequest::new(reference, client.amount(amount)).with_card(Card {
                number: card_number,
                expiry_month,
                expiry_year,
                cvc,
                holder_name: holder,
            });
            let response = client.payment().authorise(req).await.context("authorise")?;
            to_pretty_json(&response)
        }
        Command::Capture {
            original_reference,
            amount,
        } => {
            let req = CaptureRequest::new(original_reference, client.amount(amount));
            let response = client.modification().capture(req).await.context("capture")?;
            to_pretty_json(&response)
        }
        Command::Refund {
            original_reference,
            amount,
        } => {
            let req = RefundRequest::new(original_reference, client.amount(amount));
            let response = client.modification().refund(req).await.context("refund")?;
            to_pretty_json(&response)
        }
        Command::Cancel { original_reference } => {
            let req = CancelRequest::new(original_reference);
            let response = client.modification().cancel(req).await.context("cancel")?;
            to_pretty_json(&response)
        }
        Command::CancelOrRefund { original_reference } => {
            let req = CancelOrRefundRequest::new(original_reference);
            let response = client
                .modification()
                .cancel_or_refund(req)
                .await
                .context("cancel or refund")?;
            to_pretty_json(&response)
        }
        Command::HppUrl {
            reference,
            amount,
            brand_code,
        } => {
            let hpp = client.hpp().context("hosted payment pages")?;
            let mut req = HppRequest::new(reference.unwrap_or_else(generate_reference), amount);
            let url = if brand_code.is_some() {
                req.brand_code = brand_code;
                hpp.skip_details_url(&req)
            } else {
                hpp.select_url(&req)
            }
            .context("build hpp url")?;
            Ok(url.to_string())
        }
    }
}

fn generate_reference() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("encode response")
}
