/*
[INPUT]:  Environment selector, API user credentials, optional HPP HMAC key
[OUTPUT]: Immutable credential values used by every outbound request
[POS]:    Auth layer - credential model for Adyen API calls
[UPDATE]: When adding new credential kinds or environments
*/

pub mod credentials;

pub use credentials::{Credentials, Environment};
