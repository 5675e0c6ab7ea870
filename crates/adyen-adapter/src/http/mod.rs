/*
[INPUT]:  Credentials, client configuration and API endpoint names
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod executor;
pub mod modification;
pub mod payment;
pub mod response;

pub use error::{AdyenError, Result};
pub use response::ProviderResponse;

pub use client::{API_VERSION, AdyenClient, ClientConfig, DEFAULT_CURRENCY, Endpoints};
pub use modification::ModificationGateway;
pub use payment::PaymentGateway;
