//! Provider endpoint locations

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{AUTHORIZE_PATH, REVOKE_PATH, TOKEN_PATH, TWITCH_BASE_URL, VALIDATE_PATH};
use crate::error::{Error, Result};

/// The four endpoints a provider exposes.
///
/// Built once and handed to `OAuthClient`; nothing in the crate hardcodes a
/// provider address, so tests and alternative deployments only swap this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub authorize: Url,
    pub token: Url,
    pub validate: Url,
    pub revoke: Url,
}

impl Endpoints {
    /// Endpoints of the public Twitch identity service.
    pub fn twitch() -> Result<Self> {
        Self::from_base_url(TWITCH_BASE_URL)
    }

    /// Derive all four endpoints from a base such as `https://id.twitch.tv/oauth2`.
    ///
    /// The base must be an absolute `http` or `https` URL without a query or
    /// fragment.
    pub fn from_base_url(base: &str) -> Result<Self> {
        let parsed = Url::parse(base)
            .map_err(|e| Error::InvalidEndpoint(format!("base url {base:?}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint(format!(
                "base url must use http or https, got: {}",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::InvalidEndpoint(format!(
                "base url must not carry a query or fragment: {base}"
            )));
        }

        let root = parsed.as_str().trim_end_matches('/');
        let join = |path: &str| {
            Url::parse(&format!("{root}{path}"))
                .map_err(|e| Error::InvalidEndpoint(format!("{root}{path}: {e}")))
        };

        Ok(Self {
            authorize: join(AUTHORIZE_PATH)?,
            token: join(TOKEN_PATH)?,
            validate: join(VALIDATE_PATH)?,
            revoke: join(REVOKE_PATH)?,
        })
    }
}
