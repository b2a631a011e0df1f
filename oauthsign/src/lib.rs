//! Signing OAuth 1.0a requests without effort.
//!
//! This crate bundles [`oauthsign_core`] and the OAuth 1.0a signer, and
//! offers a ready to use [`Context`] behind the `default-context` feature.
//!
//! ```no_run
//! # async fn example() -> oauthsign::Result<()> {
//! use oauthsign::oauth1::{Parameters, RequestSigner};
//!
//! let ctx = oauthsign::default_context();
//! let signer = RequestSigner::new("consumer-key", "consumer-secret");
//! let result = signer
//!     .sign(&ctx, "GET", "https://example.com/resource", None, None, Parameters::new())
//!     .await?;
//! println!("Authorization: {}", result.header());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use oauthsign_core::*;

pub mod oauth1;

/// Create a context that reads files with tokio and env from the OS.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(oauthsign_file_read_tokio::TokioFileRead)
        .with_env(OsEnv)
}
