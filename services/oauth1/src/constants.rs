// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol parameters injected by the signer.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_TOKEN: &str = "oauth_token";
/// Token secret carried in the parameter set for the HMAC key only.
///
/// Never serialized into the base string, query string or header.
pub const OAUTH_SECRET: &str = "oauth_secret";

// Env values used by Config::from_env.
pub const ENV_OAUTH_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const ENV_OAUTH_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const ENV_OAUTH_SIGNATURE_METHOD: &str = "OAUTH_SIGNATURE_METHOD";
pub const ENV_OAUTH_PRIVATE_KEY_FILE: &str = "OAUTH_PRIVATE_KEY_FILE";
pub const ENV_OAUTH_VERSION: &str = "OAUTH_VERSION";

pub const DEFAULT_OAUTH_VERSION: &str = "1.0";
pub const NONCE_LENGTH: usize = 5;

/// AsciiSet for [OAuth 1.0 Percent Encoding](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
