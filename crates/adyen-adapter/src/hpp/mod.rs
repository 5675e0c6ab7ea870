/*
[INPUT]:  HMAC credentials, HPP session parameters
[OUTPUT]: Signed HPP form fields, redirect URLs, directory lookups
[POS]:    HPP layer - hosted payment pages
[UPDATE]: When adding new HPP pages or changing signing
*/

pub mod gateway;
pub mod request;
pub mod signature;

pub use gateway::HppGateway;
pub use request::HppRequest;
pub use signature::{HmacSigner, MERCHANT_SIG_FIELD};
