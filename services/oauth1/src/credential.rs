use oauthsign_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Consumer credential that identifies the calling application.
///
/// Configured once and read-only for the lifetime of a signer.
#[derive(Default, Clone)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret, the first half of the HMAC signing key.
    pub consumer_secret: String,
}

impl Credential {
    /// Create a new consumer credential.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .finish()
    }
}
