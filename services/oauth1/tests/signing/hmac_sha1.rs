use super::init_signing_test;
use anyhow::Result;
use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::Context;
use oauthsign_oauth1::{Parameters, RequestSigner, SigningRequest, SigningResult};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[tokio::test]
async fn test_url_query_is_merged() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let req = SigningRequest::new("GET", "http://example.com/resource?foo=bar")
        .with_nonce("abcde")
        .with_timestamp(1700000000);
    let result = signer.sign_request(&ctx, req).await?;

    assert_eq!(
        result.base_string(),
        "GET&http%3A%2F%2Fexample.com%2Fresource&foo%3Dbar%26oauth_consumer_key%3Dkey%26oauth_nonce%3Dabcde%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_version%3D1.0"
    );
    assert_eq!(result.signature(), "M7X9w36IB5LzAXezwKsOI0jdOpI=");
    assert_eq!(
        result.normalized_url(),
        "http://example.com/resource?foo=bar&oauth_consumer_key=key&oauth_nonce=abcde&oauth_signature=M7X9w36IB5LzAXezwKsOI0jdOpI%3D&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1700000000&oauth_version=1.0"
    );
    assert_eq!(
        result.header(),
        r#"OAuth realm="", oauth_signature_method="HMAC-SHA1", oauth_signature="M7X9w36IB5LzAXezwKsOI0jdOpI%3D", oauth_nonce="abcde", oauth_timestamp="1700000000", oauth_consumer_key="key", oauth_version="1.0""#
    );
    Ok(())
}

#[tokio::test]
async fn test_non_utf8_query_bytes_are_kept() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let req = SigningRequest::new("GET", "http://example.com/r?name=caf%E9")
        .with_nonce("abcde")
        .with_timestamp(1700000000);
    let result = signer.sign_request(&ctx, req).await?;

    assert_eq!(
        result.base_string(),
        "GET&http%3A%2F%2Fexample.com%2Fr&name%3Dcaf%25E9%26oauth_consumer_key%3Dkey%26oauth_nonce%3Dabcde%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_version%3D1.0"
    );
    assert_eq!(result.signature(), "JQYO3yuY+yQ5lUEpTG/UaCQwwmo=");
    assert_eq!(
        result.normalized_url(),
        "http://example.com/r?name=caf%E9&oauth_consumer_key=key&oauth_nonce=abcde&oauth_signature=JQYO3yuY%2ByQ5lUEpTG%2FUaCQwwmo%3D&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1700000000&oauth_version=1.0"
    );
    Ok(())
}

#[tokio::test]
async fn test_signature_matches_independent_hmac() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let result = signer
        .sign(&ctx, "GET", "http://example.com/", None, None, Parameters::new())
        .await?;

    assert_eq!(
        result.signature(),
        base64_hmac_sha1(b"secret&", result.base_string().as_bytes())
    );
    Ok(())
}

#[tokio::test]
async fn test_list_params_and_reserved_characters() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("qyprd key", "s3cr=t~");

    let req = SigningRequest::new(
        "POST",
        "https://sandbox-quickbooks.api.intuit.com/v3/company/123/query",
    )
    .with_token(Some("tok/en"), Some("tok+secret"))
    .with_param("query", "select * from Customer")
    .with_param("tags", vec!["b", "a"])
    .with_param("tilde", "a~b")
    .with_nonce("Xy9Qz")
    .with_timestamp(1609459200);
    let result = signer.sign_request(&ctx, req).await?;

    assert_eq!(
        result.base_string(),
        "POST&https%3A%2F%2Fsandbox-quickbooks.api.intuit.com%2Fv3%2Fcompany%2F123%2Fquery&oauth_consumer_key%3Dqyprd%2520key%26oauth_nonce%3DXy9Qz%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1609459200%26oauth_token%3Dtok%252Fen%26oauth_version%3D1.0%26query%3Dselect%2520%252A%2520from%2520Customer%26tags%3Da%26tags%3Db%26tilde%3Da~b"
    );
    assert_eq!(result.signature(), "V28cnfLI+WrTNAcT1KWy4PTqRwg=");
    assert_eq!(
        result.normalized_url(),
        "https://sandbox-quickbooks.api.intuit.com/v3/company/123/query?oauth_consumer_key=qyprd%20key&oauth_nonce=Xy9Qz&oauth_signature=V28cnfLI%2BWrTNAcT1KWy4PTqRwg%3D&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1609459200&oauth_token=tok%2Fen&oauth_version=1.0&query=select%20%2A%20from%20Customer&tags=a&tags=b&tilde=a~b"
    );
    assert_eq!(
        result.header(),
        r#"OAuth realm="", oauth_signature_method="HMAC-SHA1", oauth_signature="V28cnfLI%2BWrTNAcT1KWy4PTqRwg%3D", oauth_nonce="Xy9Qz", oauth_timestamp="1609459200", oauth_token="tok%2Fen", oauth_consumer_key="qyprd%20key", oauth_version="1.0""#
    );
    Ok(())
}

#[tokio::test]
async fn test_fixed_nonce_and_timestamp_is_deterministic() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let req = SigningRequest::new("PUT", "https://example.com/items/1?b=2&a=1")
        .with_token(Some("token"), Some("token-secret"))
        .with_param("name", "widget")
        .with_nonce("n0nce")
        .with_timestamp(1700000000);

    let first = signer.sign_request(&ctx, req.clone()).await?;
    let second = signer.sign_request(&ctx, req).await?;
    assert_eq!(first, second);
    Ok(())
}

async fn sign_fixed(
    ctx: &Context,
    signer: &RequestSigner,
    params: Parameters,
) -> oauthsign_core::Result<SigningResult> {
    let req = SigningRequest::new("GET", "http://example.com/")
        .with_params(params)
        .with_nonce("abcde")
        .with_timestamp(1700000000);
    signer.sign_request(ctx, req).await
}

#[tokio::test]
async fn test_param_insertion_order_does_not_matter() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let forward: Parameters = [("alpha", "1"), ("beta", "2"), ("gamma", "3")]
        .into_iter()
        .collect();
    let backward: Parameters = [("gamma", "3"), ("beta", "2"), ("alpha", "1")]
        .into_iter()
        .collect();

    let a = sign_fixed(&ctx, &signer, forward).await?;
    let b = sign_fixed(&ctx, &signer, backward).await?;
    assert_eq!(a.base_string(), b.base_string());
    assert_eq!(a.signature(), b.signature());
    assert_eq!(a.normalized_url(), b.normalized_url());
    Ok(())
}

#[tokio::test]
async fn test_precedence_of_parameters() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let req = SigningRequest::new("GET", "http://example.com/?foo=from-url&keep=1")
        .with_param("foo", "from-caller")
        .with_param("oauth_nonce", "from-caller")
        .with_param("oauth_consumer_key", "from-caller")
        .with_nonce("fixed")
        .with_timestamp(1700000000);
    let result = signer.sign_request(&ctx, req).await?;

    let query = result
        .normalized_url()
        .split_once('?')
        .map(|(_, q)| q.to_string())
        .expect("query must exist");
    assert!(query.contains("foo=from-caller"));
    assert!(query.contains("keep=1"));
    assert!(query.contains("oauth_nonce=fixed"));
    assert!(query.contains("oauth_consumer_key=key"));
    assert!(!query.contains("from-url"));
    assert!(!result.base_string().contains("from-url"));
    Ok(())
}

#[tokio::test]
async fn test_token_secret_only_changes_the_key() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");
    let req = SigningRequest::new("GET", "http://example.com/")
        .with_nonce("abcde")
        .with_timestamp(1700000000);

    let without = signer.sign_request(&ctx, req.clone()).await?;
    let with = signer
        .sign_request(&ctx, req.with_token(None, Some("token secret")))
        .await?;

    assert_eq!(without.base_string(), with.base_string());
    assert_ne!(without.signature(), with.signature());
    assert_eq!(
        with.signature(),
        base64_hmac_sha1(b"secret&token%20secret", with.base_string().as_bytes())
    );
    for output in [with.base_string(), with.normalized_url(), with.header()] {
        assert!(!output.contains("oauth_secret"));
        assert!(!output.contains("token%20secret"));
    }
    Ok(())
}

#[test_case("GET"; "upper case")]
#[test_case("get"; "lower case")]
#[test_case("PATCH"; "not in the usual set")]
#[tokio::test]
async fn test_method_is_passed_through(method: &str) -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret");

    let result = signer
        .sign(&ctx, method, "http://example.com/", None, None, Parameters::new())
        .await?;
    assert!(result.base_string().starts_with(&format!("{method}&http%3A%2F%2F")));
    Ok(())
}

#[tokio::test]
async fn test_custom_version() -> Result<()> {
    let ctx = init_signing_test();
    let signer = RequestSigner::new("key", "secret").with_version("1.0a");

    let result = signer
        .sign(&ctx, "GET", "http://example.com/", None, None, Parameters::new())
        .await?;
    assert!(result.base_string().contains("oauth_version%3D1.0a"));
    assert!(result.header().ends_with(r#"oauth_version="1.0a""#));
    Ok(())
}
