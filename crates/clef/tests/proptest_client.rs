//! Property-based tests for URL resolution and error classification.

use proptest::prelude::*;

use clef::client::ClefClient;
use clef::config::Config;
use clef::error::{ClientError, ProviderError};

fn client() -> ClefClient {
    ClefClient::new(Config::new("app", "secret")).expect("client")
}

proptest! {
    /// Operation paths with tokens resolve under the API base.
    #[test]
    fn info_path_resolves_under_base(token in "[A-Za-z0-9_]{1,64}") {
        let url = client().resolve(&format!("info?access_token={token}")).unwrap();
        let expected = format!("https://clef.io/api/info?access_token={token}");
        prop_assert_eq!(url.as_str(), expected);
    }

    /// Only the exact message marks an invalid token.
    #[test]
    fn invalid_token_iff_exact_message(message in ".{0,40}", status in 400u16..600) {
        let error = ProviderError {
            message: message.clone(),
            context: String::new(),
            internal_code: String::new(),
        };
        let err = ClientError::from_provider(status, error);
        prop_assert_eq!(err.is_invalid_token(), message == "Invalid token.");
    }

    /// Any error body decodes without panicking; unknown shapes fall back to empty.
    #[test]
    fn provider_error_decode_never_panics(body in ".{0,80}") {
        let error: ProviderError = serde_json::from_str(&body).unwrap_or_default();
        prop_assert!(error.message.len() <= body.len());
    }
}

#[test]
fn exact_invalid_token_message_classifies() {
    let error = ProviderError {
        message: "Invalid token.".into(),
        ..ProviderError::default()
    };
    assert!(ClientError::from_provider(403, error).is_invalid_token());
}
