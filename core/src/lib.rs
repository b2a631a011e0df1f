//! Core components for signing OAuth 1.0a requests.
//!
//! This crate provides the foundational types shared by the oauthsign
//! ecosystem. Protocol logic lives in service crates such as `oauthsign-oauth1`;
//! everything here is protocol agnostic.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Error**: The error type returned by every signing operation, classified by [`ErrorKind`]
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     home_dir: None,
//!     envs: HashMap::from([("OAUTH_CONSUMER_KEY".to_string(), "key".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("OAUTH_CONSUMER_KEY").as_deref(), Some("key"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: Clock helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
