//! OAuth 1.0a support with convenience APIs.

pub use oauthsign_oauth1::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Context, Result};

/// Create a signer configured from `OAUTH_*` environment variables.
///
/// The context used to read the environment is returned as well, so that
/// key files referenced by `OAUTH_PRIVATE_KEY_FILE` are read through it.
///
/// ```no_run
/// # async fn example() -> oauthsign::Result<()> {
/// let (ctx, signer) = oauthsign::oauth1::default_signer()?;
///
/// let (mut parts, _) = http::Request::get("https://example.com/resource")
///     .body(())
///     .unwrap()
///     .into_parts();
/// signer
///     .sign_parts(&ctx, &mut parts, None, None, Default::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> Result<(Context, RequestSigner)> {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    let signer = RequestSigner::from_config(&config)?;
    Ok((ctx, signer))
}
