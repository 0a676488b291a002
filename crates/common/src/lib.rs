//! Types shared across the Twitch OAuth workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
