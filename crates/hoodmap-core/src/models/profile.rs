//! User profile, session and onboarding payloads.

use serde::{Deserialize, Serialize};

use crate::onboarding::NICKNAME_CHARS;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub nickname: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub total_xp: u32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub favorite_count: u32,
}

/// Partial update sent by the profile edit form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

impl ProfileUpdate {
    /// Build an update from the edit form. Only fields that differ from
    /// `current` are sent; an empty neighborhood leaves it unchanged.
    pub fn parse(current: &Profile, nickname: &str, neighborhood: &str) -> Result<Self, &'static str> {
        let nickname = nickname.trim();
        if !NICKNAME_CHARS.contains(&nickname.chars().count()) {
            return Err("Nickname must be 2 to 16 characters");
        }
        let neighborhood = neighborhood.trim();
        Ok(Self {
            nickname: (nickname != current.nickname).then(|| nickname.to_string()),
            neighborhood: (!neighborhood.is_empty()
                && current.neighborhood.as_deref() != Some(neighborhood))
            .then(|| neighborhood.to_string()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.neighborhood.is_none()
    }
}

/// Authenticated session as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: u64,
    pub email: String,
    #[serde(default)]
    pub onboarded: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Minimum password length accepted by the signup form.
pub const MIN_PASSWORD_CHARS: usize = 8;

impl SignupRequest {
    pub fn parse(email: &str, password: &str, confirm: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err("Enter a valid email address");
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err("Password must be at least 8 characters");
        }
        if password != confirm {
            return Err("Passwords do not match");
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        assert!(SignupRequest::parse("me@example.com", "longenough", "longenough").is_ok());
        assert_eq!(
            SignupRequest::parse("me@", "longenough", "longenough"),
            Err("Enter a valid email address")
        );
        assert!(SignupRequest::parse("me@example.com", "short", "short").is_err());
        assert_eq!(
            SignupRequest::parse("me@example.com", "longenough", "different"),
            Err("Passwords do not match")
        );
    }

    fn profile() -> Profile {
        Profile {
            id: 1,
            nickname: "minji".into(),
            neighborhood: Some("Mangwon-dong".into()),
            interests: vec![],
            total_xp: 0,
            avatar_url: None,
            review_count: 0,
            favorite_count: 0,
        }
    }

    #[test]
    fn test_update_sends_only_changes() {
        let current = profile();
        let update = ProfileUpdate::parse(&current, " minji ", "Mangwon-dong").unwrap();
        assert!(update.is_empty());

        let update = ProfileUpdate::parse(&current, "jisoo", "").unwrap();
        assert_eq!(update.nickname.as_deref(), Some("jisoo"));
        assert_eq!(update.neighborhood, None);
    }

    #[test]
    fn test_update_rejects_short_nickname() {
        assert!(ProfileUpdate::parse(&profile(), "j", "").is_err());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = ProfileUpdate {
            nickname: Some("minji".into()),
            neighborhood: None,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"nickname":"minji"}"#);
    }
}
