use anyhow::Result;
use oauthsign_core::{Context, OsEnv};
use oauthsign_file_read_tokio::TokioFileRead;
use oauthsign_oauth1::{Config, Parameters, RequestSigner};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    // Read OAUTH_* from the environment, fall back to demo credentials.
    let config = Config::default().from_env(&ctx);
    let signer = match RequestSigner::from_config(&config) {
        Ok(signer) => signer,
        Err(err) => {
            println!("No usable config found ({err}), using demo credentials");
            RequestSigner::new("qyprd-demo-consumer-key", "demo-consumer-secret")
        }
    };

    let mut params = Parameters::new();
    params.insert("query", "select * from Customer");

    let result = signer
        .sign(
            &ctx,
            "GET",
            "https://sandbox-quickbooks.api.intuit.com/v3/company/123/query?minorversion=65",
            Some("demo-token"),
            Some("demo-token-secret"),
            params,
        )
        .await?;

    println!("Signature base string: {}", result.base_string());
    println!("Normalized url: {}", result.normalized_url());
    println!("Authorization: {}", result.header());

    // The same signer works on an http request head.
    let (mut parts, _body) =
        http::Request::get("https://sandbox-quickbooks.api.intuit.com/v3/company/123/companyinfo/123")
            .body(())?
            .into_parts();
    signer
        .sign_parts(&ctx, &mut parts, Some("demo-token"), Some("demo-token-secret"), Parameters::new())
        .await?;
    println!("Signed headers: {:?}", parts.headers);

    Ok(())
}
