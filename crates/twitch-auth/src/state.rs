//! Anti-forgery `state` values for the authorization URL.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;

/// Generate a random `state` value.
///
/// 32 random bytes as URL-safe base64 without padding (43 characters). Safe
/// to put in a query string unescaped.
pub fn generate_state() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
