use anyhow::Result;
use oauthsign_core::{Context, OsEnv};
use oauthsign_file_read_tokio::TokioFileRead;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    // Path from command line arguments, or the conventional key location.
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "~/.oauth/private_key.pem".to_string());
    let Some(path) = ctx.expand_home_dir(&path) else {
        eprintln!("home directory is unknown, pass an absolute path");
        return Ok(());
    };

    match ctx.file_read_as_string(&path).await {
        Ok(content) => {
            let header = content.lines().next().unwrap_or_default();
            println!("Read {} bytes from {path}", content.len());
            println!("PEM header: {header}");
        }
        Err(e) => {
            eprintln!("Failed to read {path}: {e}");
        }
    }

    Ok(())
}
