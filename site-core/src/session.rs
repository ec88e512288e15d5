use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key holding the signed-in admin as JSON.
pub const SESSION_KEY: &str = "adminUser";

/// SHA-256 of the shared demo password.
const DEMO_PASSWORD_SHA256: [u8; 32] = [
    0xef, 0x92, 0xb7, 0x78, 0xba, 0xfe, 0x77, 0x1e, 0x89, 0x24, 0x5b, 0x89, 0xec, 0xbc, 0x08, 0xa4,
    0x4a, 0x4e, 0x16, 0x6c, 0x06, 0x65, 0x99, 0x11, 0x88, 0x1f, 0x38, 0x3d, 0x44, 0x73, 0xe9, 0x4f,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Contributor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Contributor];

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Contributor => "Contributor",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Contributor => "contributor",
        }
    }
}

/// The record persisted under [`SESSION_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("stored session is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Minimal key/value persistence for the session record.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn clear(&self, key: &str) -> Result<(), SessionError>;
}

/// In-memory store. Clones share contents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().retain(|(k, _)| k != key);
        Ok(())
    }
}

fn demo_accounts() -> [AdminUser; 3] {
    let account = |id: &str, name: &str, email: &str, role| AdminUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    };
    [
        account("1", "Admin User", "admin@example.com", Role::Admin),
        account("2", "Editor User", "editor@example.com", Role::Editor),
        account("3", "Contributor User", "contributor@example.com", Role::Contributor),
    ]
}

fn password_matches(password: &str) -> bool {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().copied().eq(DEMO_PASSWORD_SHA256.iter().copied())
}

/// Admin sign-in state over an injected [`CredentialStore`].
pub struct Session<S: CredentialStore> {
    store: S,
    user: Option<AdminUser>,
    restored: bool,
}

impl<S: CredentialStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store, user: None, restored: false }
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    /// True until [`Session::restore`] has run once.
    pub fn is_loading(&self) -> bool {
        !self.restored
    }

    /// Load a previously saved user. An unreadable record is removed and the
    /// session stays signed out.
    pub fn restore(&mut self) -> Option<&AdminUser> {
        self.restored = true;
        match self.read_stored() {
            Ok(user) => self.user = user,
            Err(e) => {
                log::warn!("Discarding stored admin session: {e}");
                if let Err(e) = self.store.clear(SESSION_KEY) {
                    log::warn!("Failed to clear admin session: {e}");
                }
                self.user = None;
            }
        }
        self.user.as_ref()
    }

    fn read_stored(&self) -> Result<Option<AdminUser>, SessionError> {
        match self.store.get(SESSION_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Check the demo credentials. On success the user is remembered and
    /// persisted; a storage failure still signs in for this page load.
    pub fn login(&mut self, email: &str, password: &str) -> Option<&AdminUser> {
        let email = email.trim();
        let found = demo_accounts()
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .filter(|_| password_matches(password))?;

        match serde_json::to_string(&found) {
            Ok(json) => {
                if let Err(e) = self.store.set(SESSION_KEY, &json) {
                    log::warn!("Failed to persist admin session: {e}");
                }
            }
            Err(e) => log::warn!("Failed to encode admin session: {e}"),
        }
        log::info!("Admin signed in: {} ({})", found.email, found.role.slug());
        self.user = Some(found);
        self.user.as_ref()
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.store.clear(SESSION_KEY) {
            log::warn!("Failed to clear admin session: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_persists_user() {
        let store = MemoryStore::new();
        let mut session = Session::new(store.clone());
        let user = session.login("editor@example.com", "password123").cloned();
        assert_eq!(user.as_ref().map(|u| u.role), Some(Role::Editor));

        let json = store.get(SESSION_KEY).unwrap().unwrap();
        let stored: AdminUser = serde_json::from_str(&json).unwrap();
        assert_eq!(Some(stored), user);
        assert!(json.contains("\"role\":\"editor\""));
    }

    #[test]
    fn test_wrong_password_or_unknown_email_fails() {
        let store = MemoryStore::new();
        let mut session = Session::new(store.clone());
        assert!(session.login("admin@example.com", "password").is_none());
        assert!(session.login("nobody@example.com", "password123").is_none());
        assert!(session.user().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_restore_reads_existing_record() {
        let store = MemoryStore::new();
        store
            .set(
                SESSION_KEY,
                r#"{"id":"1","name":"Admin User","email":"admin@example.com","role":"admin"}"#,
            )
            .unwrap();
        let mut session = Session::new(store);
        assert!(session.is_loading());
        let user = session.restore().cloned().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_restore_discards_corrupt_record() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();
        let mut session = Session::new(store.clone());
        assert!(session.restore().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_logout_clears_store() {
        let store = MemoryStore::new();
        let mut session = Session::new(store.clone());
        session.login("admin@example.com", "password123");
        session.logout();
        assert!(session.user().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());

        let mut fresh = Session::new(store);
        assert!(fresh.restore().is_none());
    }

    #[test]
    fn test_email_match_trims_and_ignores_case() {
        let mut session = Session::new(MemoryStore::new());
        let user = session.login("  Admin@Example.COM ", "password123").cloned();
        assert_eq!(user.map(|u| u.email), Some("admin@example.com".to_string()));
        session.logout();
        assert!(session.login("admin@example.com.", "password123").is_none());
        assert!(session.login("admin@example.com", " password123").is_none());
    }
}
