//! Signed cookie sessions for the admin panel.
//!
//! The cookie value is `{username}:{expiry}:{signature}` where the signature
//! is a hex SHA-256 over the secret and the signed fields. Verification uses
//! constant-time comparison.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use time::OffsetDateTime;

pub const SESSION_COOKIE: &str = "vetrina_session";

#[derive(Debug, Clone)]
pub struct SessionSigner {
    secret: String,
    ttl_seconds: u64,
}

impl SessionSigner {
    pub fn new(secret: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub fn issue(&self, username: &str) -> String {
        let expiry = OffsetDateTime::now_utc().unix_timestamp() + self.ttl_seconds as i64;
        let signature = self.signature(username, expiry);
        format!("{username}:{expiry}:{signature}")
    }

    /// Return the authenticated username when the cookie is intact and not
    /// expired.
    pub fn verify(&self, value: &str) -> Option<String> {
        // Usernames may contain `:`; the last two segments are ours.
        let mut parts = value.rsplitn(3, ':');
        let signature = parts.next()?;
        let expiry: i64 = parts.next()?.parse().ok()?;
        let username = parts.next()?;

        let expected = self.signature(username, expiry);
        let matches: bool = expected
            .as_bytes()
            .ct_eq(signature.as_bytes())
            .into();
        if !matches {
            return None;
        }
        if expiry <= OffsetDateTime::now_utc().unix_timestamp() {
            return None;
        }
        Some(username.to_string())
    }

    fn signature(&self, username: &str, expiry: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b"\x00");
        hasher.update(username.as_bytes());
        hasher.update(b"\x00");
        hasher.update(expiry.to_be_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_sessions_verify() {
        let signer = SessionSigner::new("secret", 3600);
        let cookie = signer.issue("editor");
        assert_eq!(signer.verify(&cookie).as_deref(), Some("editor"));
    }

    #[test]
    fn usernames_with_separators_round_trip() {
        let signer = SessionSigner::new("secret", 3600);
        let cookie = signer.issue("team:lead");
        assert_eq!(signer.verify(&cookie).as_deref(), Some("team:lead"));
    }

    #[test]
    fn tampered_cookies_are_rejected() {
        let signer = SessionSigner::new("secret", 3600);
        let cookie = signer.issue("editor");
        let forged = cookie.replacen("editor", "intruder", 1);
        assert_eq!(signer.verify(&forged), None);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let cookie = SessionSigner::new("secret-a", 3600).issue("editor");
        assert_eq!(SessionSigner::new("secret-b", 3600).verify(&cookie), None);
    }

    #[test]
    fn expired_sessions_are_rejected() {
        let signer = SessionSigner::new("secret", 3600);
        let expiry = OffsetDateTime::now_utc().unix_timestamp() - 10;
        let signature = signer.signature("editor", expiry);
        let stale = format!("editor:{expiry}:{signature}");
        assert_eq!(signer.verify(&stale), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let signer = SessionSigner::new("secret", 3600);
        assert_eq!(signer.verify(""), None);
        assert_eq!(signer.verify("editor"), None);
        assert_eq!(signer.verify("editor:not-a-number:aabb"), None);
    }
}
