use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;
use oauthsign_core::{Error, Result};

use crate::params::{ParamValue, Parameters};

/// Everything that describes one request to sign.
///
/// Nonce and timestamp are generated at signing time unless they are fixed
/// here, which makes signing reproducible.
#[derive(Clone, Default)]
pub struct SigningRequest {
    /// HTTP method, passed through uninterpreted.
    pub method: String,
    /// Absolute URL, may carry a query string.
    pub url: String,
    /// Token, sent as `oauth_token`.
    pub token: Option<String>,
    /// Token secret, the second half of the HMAC signing key.
    pub token_secret: Option<String>,
    /// Application level parameters to sign.
    pub params: Parameters,
    /// Fixed `oauth_nonce`.
    pub nonce: Option<String>,
    /// Fixed `oauth_timestamp`, seconds since the unix epoch.
    pub timestamp: Option<i64>,
}

impl SigningRequest {
    /// Create a new signing request.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Build a signing request from the head of an http request.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::request_invalid(format!(
                "request uri {uri} must be absolute for signing"
            )));
        }

        Ok(Self::new(parts.method.as_str(), uri.to_string()))
    }

    /// Set token and token secret. Empty values are treated as absent.
    pub fn with_token(mut self, token: Option<&str>, token_secret: Option<&str>) -> Self {
        self.token = token.filter(|v| !v.is_empty()).map(String::from);
        self.token_secret = token_secret.filter(|v| !v.is_empty()).map(String::from);
        self
    }

    /// Add a parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Merge a whole parameter set, replacing existing keys.
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params.merge(params);
        self
    }

    /// Fix the nonce instead of generating one.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Fix the timestamp instead of reading the clock.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Split the url into the base url and its query parameters.
    ///
    /// Any fragment is dropped.
    pub(crate) fn split_url(&self) -> (&str, Parameters) {
        let url = self.url.split('#').next().unwrap_or_default();
        match url.split_once('?') {
            Some((base, query)) => (base, Parameters::from_query(query)),
            None => (url, Parameters::new()),
        }
    }
}

impl Debug for SigningRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("token", &self.token)
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("params", &self.params)
            .field("nonce", &self.nonce)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
