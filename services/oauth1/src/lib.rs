//! OAuth 1.0a request signer
//!
//! Produces the signature base string, the signature (`HMAC-SHA1` or
//! `RSA-SHA1`), the normalized url and the `Authorization` header for a
//! request, following [RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849).
//!
//! ## Example
//!
//! ```no_run
//! use oauthsign_core::Context;
//! use oauthsign_oauth1::{Parameters, RequestSigner};
//!
//! # async fn example() -> oauthsign_core::Result<()> {
//! let signer = RequestSigner::new("consumer-key", "consumer-secret");
//!
//! let mut params = Parameters::new();
//! params.insert("query", "select * from Customer");
//!
//! let result = signer
//!     .sign(
//!         &Context::new(),
//!         "GET",
//!         "https://example.com/v3/company/1/query",
//!         Some("token"),
//!         Some("token-secret"),
//!         params,
//!     )
//!     .await?;
//!
//! println!("Authorization: {}", result.header());
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;
pub use config::SignatureMethod;

mod credential;
pub use credential::Credential;

mod key;
pub use key::PrivateKeySource;

mod params;
pub use params::percent_encode;
pub use params::ParamValue;
pub use params::Parameters;

mod request;
pub use request::SigningRequest;

mod result;
pub use result::SigningResult;

mod sign_request;
pub use sign_request::RequestSigner;
