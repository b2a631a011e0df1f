use anyhow::Result;
use oauthsign::oauth1::{Parameters, RequestSigner};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let (ctx, signer) = match oauthsign::oauth1::default_signer() {
        Ok(v) => v,
        Err(err) => {
            println!("{err}, using demo credentials");
            (
                oauthsign::default_context(),
                RequestSigner::new("demo-consumer-key", "demo-consumer-secret"),
            )
        }
    };

    let (mut parts, _) = http::Request::get("https://example.com/photos?file=vacation.jpg&size=original")
        .body(())?
        .into_parts();

    let result = signer
        .sign_parts(&ctx, &mut parts, Some("demo-token"), Some("demo-token-secret"), Parameters::new())
        .await?;

    println!("Normalized url: {}", result.normalized_url());
    println!("Authorization: {}", result.header());
    Ok(())
}
