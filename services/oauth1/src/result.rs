use http::header::AUTHORIZATION;
use http::HeaderValue;
use oauthsign_core::Result;

/// Artifacts produced by signing one request.
///
/// Built fresh on every signing call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningResult {
    base_string: String,
    signature: String,
    normalized_url: String,
    header: String,
}

impl SigningResult {
    pub(crate) fn new(
        base_string: String,
        signature: String,
        normalized_url: String,
        header: String,
    ) -> Self {
        Self {
            base_string,
            signature,
            normalized_url,
            header,
        }
    }

    /// The signature base string that was signed.
    pub fn base_string(&self) -> &str {
        &self.base_string
    }

    /// The base64 encoded signature, not percent encoded.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Base url followed by the normalized query string, signature included.
    pub fn normalized_url(&self) -> &str {
        &self.normalized_url
    }

    /// Value for the `Authorization` header, starting with `OAuth realm=""`.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Set the `Authorization` header of an http request head.
    pub fn apply(&self, parts: &mut http::request::Parts) -> Result<()> {
        let mut value = HeaderValue::from_str(&self.header)?;
        value.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}
