mod hmac_sha1;
mod http_parts;

use oauthsign_core::Context;
use oauthsign_file_read_tokio::TokioFileRead;
use std::path::PathBuf;

/// Initialize logging and a context able to read key files.
pub fn init_signing_test() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_file_read(TokioFileRead)
}

/// Absolute path of a file under `testdata/`.
pub fn testdata(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}
