use super::init_signing_test;
use anyhow::Result;
use http::header::AUTHORIZATION;
use oauthsign_core::ErrorKind;
use oauthsign_oauth1::{Parameters, RequestSigner};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_sign_parts_sets_authorization() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let (mut parts, _) = http::Request::get(
        "https://sandbox-quickbooks.api.intuit.com/v3/company/123/query?query=select%20*%20from%20Customer",
    )
    .body(())?
    .into_parts();

    let result = signer
        .sign_parts(
            &ctx,
            &mut parts,
            Some("token"),
            Some("token-secret"),
            Parameters::new(),
        )
        .await?;

    let header = parts
        .headers
        .get(AUTHORIZATION)
        .expect("authorization must be set");
    assert_eq!(header.to_str()?, result.header());
    assert!(header.is_sensitive());
    assert!(result.header().contains(r#"oauth_token="token""#));
    assert!(result
        .base_string()
        .contains("query%3Dselect%2520%252A%2520from%2520Customer"));
    // The uri itself is left untouched.
    assert_eq!(parts.uri.path(), "/v3/company/123/query");
    Ok(())
}

#[tokio::test]
async fn test_sign_parts_replaces_existing_authorization() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let (mut parts, _) = http::Request::post("http://example.com/resource")
        .header(AUTHORIZATION, "Basic c3RhbGU=")
        .body(())?
        .into_parts();

    signer
        .sign_parts(&ctx, &mut parts, None, None, Parameters::new())
        .await?;

    let values: Vec<_> = parts.headers.get_all(AUTHORIZATION).iter().collect();
    assert_eq!(values.len(), 1);
    assert!(values[0].to_str()?.starts_with(r#"OAuth realm="""#));
    Ok(())
}

#[tokio::test]
async fn test_sign_parts_relative_uri() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let (mut parts, _) = http::Request::get("/resource?foo=bar").body(())?.into_parts();

    let err = signer
        .sign_parts(&ctx, &mut parts, None, None, Parameters::new())
        .await
        .expect_err("relative uri must be rejected");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}
