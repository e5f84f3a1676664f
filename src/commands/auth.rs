//! Sign-in Command

use chrono::Utc;
use folio_core::auth::{sign_in_error, sign_in_url, AuthSession, SignInRequest, SignInResponse};
use folio_core::{FolioError, FolioResult};

use super::service_error;

pub async fn sign_in(api_key: &str, email: &str, password: &str) -> FolioResult<AuthSession> {
    let request = SignInRequest::new(email, password)?;
    let resp = reqwest::Client::new()
        .post(sign_in_url(api_key))
        .json(&request)
        .send()
        .await
        .map_err(service_error)?;

    let status = resp.status();
    let body = resp.text().await.map_err(service_error)?;
    if !status.is_success() {
        return Err(sign_in_error(status.as_u16(), &body));
    }

    let parsed: SignInResponse =
        serde_json::from_str(&body).map_err(|e| FolioError::Decode(format!("sign-in response: {}", e)))?;
    let session = AuthSession::from_response(parsed, Utc::now())?;
    log::info!("signed in as {}", session.email);
    Ok(session)
}
