use std::fmt::Write;

use log::debug;
use oauthsign_core::hash::{base64_encode, base64_hmac_sha1};
use oauthsign_core::time::now_timestamp;
use oauthsign_core::{Context, Error, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha1::Sha1;

use crate::config::{Config, SignatureMethod};
use crate::constants::*;
use crate::credential::Credential;
use crate::key::PrivateKeySource;
use crate::params::{encode_bytes, percent_encode, ParamValue, Parameters};
use crate::request::SigningRequest;
use crate::result::SigningResult;

/// RequestSigner that implements OAuth 1.0a request signing.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://datatracker.ietf.org/doc/html/rfc5849)
///
/// The signer only holds read-only configuration, so one instance can be
/// shared between tasks and threads freely.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    signature_method: SignatureMethod,
    private_key: Option<PrivateKeySource>,
    version: String,
}

impl RequestSigner {
    /// Create a new signer using `HMAC-SHA1` and `oauth_version` 1.0.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(consumer_key, consumer_secret),
            signature_method: SignatureMethod::default(),
            private_key: None,
            version: DEFAULT_OAUTH_VERSION.to_string(),
        }
    }

    /// Build a signer from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let consumer_key = config
            .consumer_key
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("consumer_key is required"))?;
        let signature_method = config.signature_method()?;
        let consumer_secret = match (&config.consumer_secret, signature_method) {
            (Some(v), _) => v.clone(),
            (None, SignatureMethod::RsaSha1) => String::new(),
            (None, _) => return Err(Error::config_invalid("consumer_secret is required")),
        };

        let mut signer = Self::new(consumer_key, consumer_secret)
            .with_signature_method(signature_method);
        if let Some(path) = &config.private_key_file {
            signer = signer.with_private_key(PrivateKeySource::from_file(path));
        }
        if let Some(version) = &config.version {
            signer = signer.with_version(version);
        }

        Ok(signer)
    }

    /// Set the signature method.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }

    /// Set the RSA private key used by `RSA-SHA1`.
    pub fn with_private_key(mut self, key: PrivateKeySource) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Set the value of `oauth_version`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The consumer credential of this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The active signature method.
    pub fn signature_method(&self) -> SignatureMethod {
        self.signature_method
    }

    /// Sign a request.
    ///
    /// `token` and `token_secret` are used only when non-empty. The nonce
    /// and timestamp are fresh for every call.
    pub async fn sign(
        &self,
        ctx: &Context,
        method: &str,
        url: &str,
        token: Option<&str>,
        token_secret: Option<&str>,
        params: Parameters,
    ) -> Result<SigningResult> {
        let req = SigningRequest::new(method, url)
            .with_token(token, token_secret)
            .with_params(params);
        self.sign_request(ctx, req).await
    }

    /// Sign the head of an http request in place.
    ///
    /// The produced header is stored as `Authorization`; the full result is
    /// returned for callers that want the normalized url instead.
    pub async fn sign_parts(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        token: Option<&str>,
        token_secret: Option<&str>,
        params: Parameters,
    ) -> Result<SigningResult> {
        let req = SigningRequest::from_parts(parts)?
            .with_token(token, token_secret)
            .with_params(params);

        let result = self.sign_request(ctx, req).await?;
        result.apply(parts)?;
        Ok(result)
    }

    /// Sign a fully described request.
    pub async fn sign_request(&self, ctx: &Context, req: SigningRequest) -> Result<SigningResult> {
        let (base_url, mut params) = req.split_url();
        let base_url = base_url.to_string();

        // Protocol parameters override anything from the url or the caller.
        params.merge(req.params.clone());
        params.insert(OAUTH_CONSUMER_KEY, self.credential.consumer_key.as_str());
        params.insert(OAUTH_SIGNATURE_METHOD, self.signature_method.as_str());
        params.insert(OAUTH_NONCE, req.nonce.clone().unwrap_or_else(generate_nonce));
        params.insert(
            OAUTH_TIMESTAMP,
            req.timestamp.unwrap_or_else(now_timestamp).to_string(),
        );
        params.insert(OAUTH_VERSION, self.version.as_str());
        if let Some(token) = &req.token {
            params.insert(OAUTH_TOKEN, token.as_str());
        }
        if let Some(secret) = &req.token_secret {
            params.insert(OAUTH_SECRET, secret.as_str());
        }

        let base_string = format!(
            "{}&{}&{}",
            percent_encode(&req.method),
            percent_encode(&base_url),
            percent_encode(&params.normalize())
        );
        debug!(
            "signing {} {} with {}",
            req.method, base_url, self.signature_method
        );
        debug!("signature base string: {base_string}");

        let signature = match self.signature_method {
            SignatureMethod::HmacSha1 => self.sign_hmac_sha1(&params, &base_string),
            SignatureMethod::RsaSha1 => self.sign_rsa_sha1(ctx, &base_string).await?,
            SignatureMethod::Plaintext => {
                return Err(Error::unsupported_signature_method(format!(
                    "signature method {} is not supported",
                    self.signature_method
                )))
            }
        };

        params.insert(OAUTH_SIGNATURE, signature.as_str());
        let normalized_url = format!("{base_url}?{}", params.normalize());
        let header = build_header(&params)?;

        Ok(SigningResult::new(
            base_string,
            signature,
            normalized_url,
            header,
        ))
    }

    fn sign_hmac_sha1(&self, params: &Parameters, base_string: &str) -> String {
        let token_secret = params
            .get(OAUTH_SECRET)
            .and_then(ParamValue::as_bytes)
            .unwrap_or_default();
        let key = format!(
            "{}&{}",
            percent_encode(&self.credential.consumer_secret),
            encode_bytes(token_secret)
        );

        base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
    }

    async fn sign_rsa_sha1(&self, ctx: &Context, base_string: &str) -> Result<String> {
        let source = self
            .private_key
            .as_ref()
            .ok_or_else(|| Error::key_load("RSA-SHA1 requires a private key"))?;
        let private_key = source.load(ctx).await?;

        let signing_key = SigningKey::<Sha1>::new(private_key);
        let signature = signing_key
            .try_sign(base_string.as_bytes())
            .map_err(|e| Error::key_load(format!("failed to sign with private key: {e}")))?;

        Ok(base64_encode(&signature.to_bytes()))
    }
}

/// Generate a fresh nonce from the 62 symbol alphanumeric alphabet.
fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Build the `Authorization` header value.
///
/// Field order is fixed. `oauth_token` is present only when a token is set.
fn build_header(params: &Parameters) -> Result<String> {
    let field = |key: &str| {
        params
            .get(key)
            .and_then(ParamValue::as_bytes)
            .map(encode_bytes)
    };

    let mut s = String::from(r#"OAuth realm="""#);
    for key in [
        OAUTH_SIGNATURE_METHOD,
        OAUTH_SIGNATURE,
        OAUTH_NONCE,
        OAUTH_TIMESTAMP,
        OAUTH_TOKEN,
        OAUTH_CONSUMER_KEY,
        OAUTH_VERSION,
    ] {
        if let Some(value) = field(key) {
            write!(s, r#", {key}="{value}""#)?;
        }
    }

    Ok(collapse_whitespace(&s))
}

/// Replace every run of spaces, tabs, carriage returns and newlines with a
/// single space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if matches!(c, ' ' | '\t' | '\r' | '\n') {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
