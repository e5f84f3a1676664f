//! Remote Service Clients
//!
//! HTTP bindings to the document store, sign-in and media upload services,
//! organized by service.

mod auth;
mod firestore;
mod upload;

use folio_core::{FolioError, FolioResult};
use serde_json::Value;

pub use auth::sign_in;
pub use firestore::FirestoreClient;
pub use upload::upload_image;

fn service_error(e: reqwest::Error) -> FolioError {
    FolioError::service(e)
}

/// Parsed body of a successful response; any other status is a service error.
async fn expect_json(resp: reqwest::Response) -> FolioResult<Value> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FolioError::service(format!("{} {}", status.as_u16(), error_message(&body))));
    }
    resp.json().await.map_err(service_error)
}

/// `error.message` from a Google API error body, or the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#),
            "Missing or insufficient permissions."
        );
        assert_eq!(error_message(" Bad Gateway "), "Bad Gateway");
    }
}
