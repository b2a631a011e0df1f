use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use oauthsign_core::utils::Redact;
use oauthsign_core::{Context, Error, Result};
use serde::Deserialize;

use crate::constants::*;

/// Signature methods defined by OAuth 1.0a.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
    /// `PLAINTEXT`, recognized but not supported for signing.
    Plaintext,
    /// `HMAC-SHA1`, keyed with the consumer secret and token secret.
    #[default]
    HmacSha1,
    /// `RSA-SHA1`, signed with the consumer's RSA private key.
    RsaSha1,
}

impl SignatureMethod {
    /// The name used on the wire, e.g. `HMAC-SHA1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::Plaintext => "PLAINTEXT",
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLAINTEXT" => Ok(SignatureMethod::Plaintext),
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
            _ => Err(Error::config_invalid(format!(
                "unrecognized signature method: {s}"
            ))),
        }
    }
}

/// Config for OAuth 1.0a request signing.
///
/// Every field is optional so a config can be assembled from several
/// sources. Explicit values win over [`Config::from_env`].
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Consumer key issued by the service provider.
    pub consumer_key: Option<String>,
    /// Consumer secret issued by the service provider.
    pub consumer_secret: Option<String>,
    /// Signature method wire name, `HMAC-SHA1` if unset.
    pub signature_method: Option<String>,
    /// Path to the PEM encoded RSA private key, used by `RSA-SHA1`.
    pub private_key_file: Option<String>,
    /// Value of `oauth_version`, `1.0` if unset.
    pub version: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("signature_method", &self.signature_method)
            .field("private_key_file", &self.private_key_file)
            .field("version", &self.version)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from environment variables.
    ///
    /// - `OAUTH_CONSUMER_KEY`
    /// - `OAUTH_CONSUMER_SECRET`
    /// - `OAUTH_SIGNATURE_METHOD`
    /// - `OAUTH_PRIVATE_KEY_FILE`
    /// - `OAUTH_VERSION`
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        let fill = |field: &mut Option<String>, key: &str| {
            if field.is_none() {
                *field = envs.get(key).filter(|v| !v.is_empty()).cloned();
            }
        };

        fill(&mut self.consumer_key, ENV_OAUTH_CONSUMER_KEY);
        fill(&mut self.consumer_secret, ENV_OAUTH_CONSUMER_SECRET);
        fill(&mut self.signature_method, ENV_OAUTH_SIGNATURE_METHOD);
        fill(&mut self.private_key_file, ENV_OAUTH_PRIVATE_KEY_FILE);
        fill(&mut self.version, ENV_OAUTH_VERSION);

        self
    }

    /// Resolve the configured signature method.
    pub fn signature_method(&self) -> Result<SignatureMethod> {
        match &self.signature_method {
            None => Ok(SignatureMethod::default()),
            Some(v) => v.parse(),
        }
    }
}
