//! Access gate: password verification, session expiry, and input
//! sanitization. UI/session storage is the caller's concern; this module
//! only answers "is this credential valid" and "is this session stale".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::secrets::Secrets;
use crate::settings::{SecurityConfig, DANGEROUS_CHARS};

/// Access level granted by a password.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    General,
    Ceo,
    Allison,
}

/// Checks an entered password against the configured credentials.
/// Unconfigured passwords never match; there are no built-in fallbacks.
pub fn verify_password(entered: &str, secrets: &Secrets) -> Option<UserRole> {
    let matches = |configured: &Option<String>| {
        configured.as_deref().is_some_and(|p| p == entered)
    };

    if matches(&secrets.password) {
        Some(UserRole::General)
    } else if matches(&secrets.sarah_password) {
        Some(UserRole::Ceo)
    } else if matches(&secrets.allison_password) {
        Some(UserRole::Allison)
    } else {
        None
    }
}

/// An authenticated session. Expiry is evaluated against a caller-supplied
/// clock so tests stay deterministic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: UserRole,
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(role: UserRole) -> Self {
        Session {
            role,
            authenticated_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, config: &SecurityConfig) -> bool {
        now - self.authenticated_at > Duration::hours(config.password_expiry_hours)
    }
}

/// Strips dangerous characters and truncates to `max_length`. Applied to
/// free-text input before it reaches documents or the audit log.
pub fn sanitize_input(text: &str, max_length: usize) -> String {
    text.chars()
        .filter(|c| !DANGEROUS_CHARS.contains(c))
        .take(max_length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> Secrets {
        Secrets {
            password: Some("general-pw".to_string()),
            sarah_password: Some("ceo-pw".to_string()),
            allison_password: Some("allison-pw".to_string()),
            ..Secrets::default()
        }
    }

    #[test]
    fn passwords_map_to_roles() {
        let s = secrets();
        assert_eq!(verify_password("general-pw", &s), Some(UserRole::General));
        assert_eq!(verify_password("ceo-pw", &s), Some(UserRole::Ceo));
        assert_eq!(verify_password("allison-pw", &s), Some(UserRole::Allison));
        assert_eq!(verify_password("wrong", &s), None);
    }

    #[test]
    fn unconfigured_passwords_never_match() {
        let s = Secrets::default();
        assert_eq!(verify_password("", &s), None);
        assert_eq!(verify_password("anything", &s), None);
    }

    #[test]
    fn session_expires_after_configured_hours() {
        let config = SecurityConfig::default();
        let session = Session::new(UserRole::General);
        let now = session.authenticated_at;
        assert!(!session.is_expired(now + Duration::hours(47), &config));
        assert!(session.is_expired(now + Duration::hours(49), &config));
    }

    #[test]
    fn sanitize_strips_dangerous_characters() {
        assert_eq!(
            sanitize_input("Acme <script>alert('x')</script>; Inc", 500),
            "Acme scriptalertx/script Inc"
        );
    }

    #[test]
    fn sanitize_truncates_to_max_length() {
        assert_eq!(sanitize_input("abcdef", 3), "abc");
    }
}
