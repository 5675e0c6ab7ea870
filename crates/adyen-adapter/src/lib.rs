/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Adyen adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod hpp;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, Environment};

// Re-export commonly used types from hpp
pub use hpp::{HmacSigner, HppGateway, HppRequest};

// Re-export commonly used types from http
pub use http::{
    API_VERSION,
    AdyenClient,
    AdyenError,
    ClientConfig,
    DEFAULT_CURRENCY,
    Endpoints,
    ModificationGateway,
    PaymentGateway,
    ProviderResponse,
    Result,
};

// Re-export all types
pub use types::*;
