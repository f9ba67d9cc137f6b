use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stored credentials for one user, keyed by username in `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Base64 PBKDF2 output
    pub password: String,
    /// Hex salt
    pub salt: String,
}

pub type UserMap = BTreeMap<String, UserRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Anon tag of the author, never the real username
    pub user: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Auth,
    Chat,
}

/// Per-browser session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub page: Page,
    pub logged_in: bool,
    pub username: String,
    pub anon_tag: String,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            page: Page::Auth,
            logged_in: false,
            username: String::new(),
            anon_tag: generate_anon_tag(),
        }
    }
}

impl Session {
    pub fn log_in(&mut self, username: &str) {
        self.logged_in = true;
        self.username = username.to_string();
        self.anon_tag = generate_anon_tag();
        self.page = Page::Chat;
    }

    /// The anon tag survives logout; the next login replaces it.
    pub fn log_out(&mut self) {
        self.logged_in = false;
        self.username.clear();
        self.page = Page::Auth;
    }
}

/// "Anon-" followed by a number in 100..=999
pub fn generate_anon_tag() -> String {
    format!("Anon-{}", rand::thread_rng().gen_range(100..=999))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_anon_tag(tag: &str) -> bool {
        match tag.strip_prefix("Anon-") {
            Some(digits) => {
                digits.len() == 3
                    && digits.bytes().all(|b| b.is_ascii_digit())
                    && (100..=999).contains(&digits.parse::<u32>().unwrap())
            }
            None => false,
        }
    }

    #[test]
    fn anon_tags_are_three_digits() {
        for _ in 0..500 {
            assert!(is_anon_tag(&generate_anon_tag()));
        }
    }

    #[test]
    fn new_session_starts_on_auth() {
        let session = Session::default();
        assert_eq!(session.page, Page::Auth);
        assert!(!session.logged_in);
        assert!(session.username.is_empty());
        assert!(is_anon_tag(&session.anon_tag));
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::default();
        session.log_in("alice");
        assert_eq!(session.page, Page::Chat);
        assert!(session.logged_in);
        assert_eq!(session.username, "alice");
        assert!(is_anon_tag(&session.anon_tag));

        let tag = session.anon_tag.clone();
        session.log_out();
        assert_eq!(session.page, Page::Auth);
        assert!(!session.logged_in);
        assert_eq!(session.username, "");
        assert_eq!(session.anon_tag, tag);
    }

    #[test]
    fn json_shape_matches_backing_files() {
        let message = ChatMessage { user: "Anon-123".into(), text: "hi".into() };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({"user": "Anon-123", "text": "hi"})
        );

        let record: UserRecord =
            serde_json::from_str(r#"{"password": "abc=", "salt": "00ff"}"#).unwrap();
        assert_eq!(record.salt, "00ff");
    }
}
