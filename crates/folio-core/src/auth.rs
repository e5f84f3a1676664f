//! Admin sign-in against the Identity Toolkit REST API.
//!
//! Request/response shapes, the session kept in browser storage, error text
//! shown on the login form, and the redirect rules for the two admin routes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

const SIGN_IN_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

pub fn sign_in_url(api_key: &str) -> String {
    format!("{}?key={}", SIGN_IN_ENDPOINT, api_key)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str) -> FolioResult<Self> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(FolioError::Validation("Enter your email and password.".into()));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    /// Seconds, string-encoded
    pub expires_in: String,
}

/// A signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn from_response(resp: SignInResponse, now: DateTime<Utc>) -> FolioResult<Self> {
        let seconds: i64 = resp
            .expires_in
            .trim()
            .parse()
            .map_err(|_| FolioError::Decode(format!("expiresIn `{}`", resp.expires_in)))?;
        Ok(Self {
            uid: resp.local_id,
            email: resp.email,
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
            expires_at: now + Duration::seconds(seconds),
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.id_token)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Error for a rejected sign-in, with text fit for the login form.
///
/// The API answers with codes such as `INVALID_PASSWORD` or
/// `TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled...`.
pub fn sign_in_error(status: u16, body: &str) -> FolioError {
    let code = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => return FolioError::service(format!("sign-in failed with status {}", status)),
    };
    let key = code.split(':').next().unwrap_or_default().trim();
    let text = match key {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Incorrect email or password.",
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "MISSING_PASSWORD" => "Enter your password.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        _ => return FolioError::service(code),
    };
    FolioError::Validation(text.to_string())
}

/// Routes whose reachability depends on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Login page; signed-in admins skip it
    Login,
    /// Dashboard; requires a live session
    Dashboard,
}

impl Gate {
    pub const LOGIN_PATH: &'static str = "/admin";
    pub const DASHBOARD_PATH: &'static str = "/dashboard";

    /// Where to send the visitor instead, if anywhere.
    pub fn redirect(self, session: Option<&AuthSession>, now: DateTime<Utc>) -> Option<&'static str> {
        let signed_in = session.is_some_and(|s| !s.is_expired(now));
        match (self, signed_in) {
            (Gate::Login, true) => Some(Self::DASHBOARD_PATH),
            (Gate::Dashboard, false) => Some(Self::LOGIN_PATH),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn session() -> AuthSession {
        let resp: SignInResponse = serde_json::from_str(
            r#"{"idToken":"tok","refreshToken":"ref","localId":"uid1","email":"a@b.c","expiresIn":"3600","registered":true}"#,
        )
        .unwrap();
        AuthSession::from_response(resp, now()).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let req = SignInRequest::new(" a@b.c ", "pw").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["returnSecureToken"], true);
        assert!(matches!(SignInRequest::new("", "pw"), Err(FolioError::Validation(_))));
    }

    #[test]
    fn test_session_expiry() {
        let s = session();
        assert_eq!(s.uid, "uid1");
        assert_eq!(s.bearer(), "Bearer tok");
        assert!(!s.is_expired(now() + Duration::minutes(59)));
        assert!(s.is_expired(now() + Duration::hours(1)));
    }

    #[test]
    fn test_error_mapping() {
        let err = sign_in_error(400, r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS"}}"#);
        assert_eq!(err, FolioError::Validation("Incorrect email or password.".into()));

        let err = sign_in_error(400, r#"{"error":{"message":"TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"}}"#);
        assert_eq!(err.to_string(), "Too many attempts. Try again later.");

        assert!(matches!(sign_in_error(502, "<html>"), FolioError::Service(_)));
        assert!(matches!(sign_in_error(400, r#"{"error":{"message":"WEIRD"}}"#), FolioError::Service(_)));
    }

    #[test]
    fn test_gate_redirects() {
        let s = session();
        assert_eq!(Gate::Dashboard.redirect(None, now()), Some("/admin"));
        assert_eq!(Gate::Dashboard.redirect(Some(&s), now()), None);
        assert_eq!(Gate::Login.redirect(Some(&s), now()), Some("/dashboard"));
        assert_eq!(Gate::Login.redirect(None, now()), None);

        let later = now() + Duration::hours(2);
        assert_eq!(Gate::Dashboard.redirect(Some(&s), later), Some("/admin"));
        assert_eq!(Gate::Login.redirect(Some(&s), later), None);
    }
}
