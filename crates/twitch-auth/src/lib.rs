//! Twitch OAuth2 client library
//!
//! Obtains, validates and revokes Twitch access tokens. Three authenticators
//! cover the grant types Twitch supports; all of them share one
//! `OAuthClient`, which owns the HTTP client and the provider `Endpoints`.
//!
//! User token flow (authorization code):
//! 1. Build an `AuthorizationCodeAuthenticator` with the scopes you need
//! 2. Send the user to `authorization_url()`
//! 3. Trade the `code` from the redirect with `exchange_code()`
//! 4. Call `validate_token()` on startup and periodically after that
//! 5. Use `refresh_token()` before expiry and `revoke_token()` on logout
//!
//! App tokens come from `ClientCredentialsAuthenticator::request_token()`.
//! Clients without a secret use `ImplicitAuthenticator` and read the token
//! from the redirect fragment.
//!
//! Every network call returns `Result<Outcome<T>>`: `Ok(Outcome::Failure)`
//! when Twitch answered with an error, `Err` when there was no usable answer.

mod authorization_code;
mod authorize;
mod client;
mod client_credentials;
pub mod constants;
mod endpoints;
mod error;
mod implicit;
pub mod metrics;
mod response;
pub mod scope;
mod state;
mod token;

#[cfg(test)]
mod test_support;

pub use authorization_code::AuthorizationCodeAuthenticator;
pub use client::OAuthClient;
pub use client_credentials::ClientCredentialsAuthenticator;
pub use endpoints::Endpoints;
pub use error::{Error, Result};
pub use implicit::ImplicitAuthenticator;
pub use response::{
    AccessToken, FailedRequest, Outcome, RevocationOutcome, TokenOutcome, TokenValidation,
    ValidationOutcome,
};
pub use scope::{Scope, UnknownScope, decode_scope, decode_scopes, encode_scopes};
pub use state::generate_state;
