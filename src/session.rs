//! Session State
//!
//! Bearer credential persisted in localStorage, plus a local decode of the
//! JWT payload so the app can route without a round trip. The server remains
//! the authority on token validity; the local expiry check only drives UI
//! routing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

const TOKEN_KEY: &str = "ticklist.token";

/// User fields embedded in the token payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserClaims {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
}

/// Token payload
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    pub user: UserClaims,
    #[serde(default)]
    pub iat: Option<f64>,
    #[serde(default)]
    pub exp: Option<f64>,
}

/// Handle to the persisted credential
#[derive(Clone, Copy, Default)]
pub struct Session;

impl Session {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    pub fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }

    pub fn claims(&self) -> Option<SessionClaims> {
        decode_claims(&self.token()?)
    }

    /// Whether a credential exists and has not passed its expiry
    pub fn is_valid(&self) -> bool {
        match self.claims() {
            Some(claims) => match claims.exp {
                Some(exp) => js_sys::Date::now() / 1000.0 < exp,
                None => true,
            },
            None => false,
        }
    }
}

/// Decode the payload segment of a JWT without verifying the signature
pub fn decode_claims(token: &str) -> Option<SessionClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_token(payload: &str) -> String {
        format!("eyJh.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_claims() {
        let token = fake_token(
            r#"{"user":{"id":"u1","email":"a@b.c","name":"Ada","rememberMe":true},"iat":1,"exp":2}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user.name, "Ada");
        assert!(claims.user.remember_me);
        assert_eq!(claims.exp, Some(2.0));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("a.!!!.c").is_none());
        assert!(decode_claims(&fake_token(r#"{"nope":1}"#)).is_none());
    }
}
