use super::persist::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Storage key for the persisted auth session
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AuthSession {
    user: Option<User>,
    is_authenticated: bool,
}

/// Mock auth state container, persisted across restarts.
///
/// No real credential verification happens here: any non-empty inputs are
/// accepted. The session is restored from storage at construction and written
/// back on every change.
pub struct AuthStore {
    session: RwLock<AuthSession>,
    storage: Arc<KeyValueStorage>,
}

impl AuthStore {
    pub fn new(storage: Arc<KeyValueStorage>) -> Self {
        let session: AuthSession = storage.load(AUTH_STORAGE_KEY).unwrap_or_default();
        if session.is_authenticated {
            info!("Restored auth session");
        }

        Self {
            session: RwLock::new(session),
            storage,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthSession> {
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthSession> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }

    // Store operations are total: a failed write keeps the in-memory session
    // and only logs.
    fn persist(&self) {
        let snapshot = self.read().clone();
        if let Err(e) = self.storage.save(AUTH_STORAGE_KEY, &snapshot) {
            warn!("Failed to persist auth session: {:#}", e);
        }
    }

    /// Mock login: succeeds for any non-empty email and password, deriving the
    /// display name from the email local part.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            return false;
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name,
        };

        {
            let mut session = self.write();
            session.user = Some(user);
            session.is_authenticated = true;
        }
        self.persist();
        true
    }

    /// Mock signup: succeeds for any non-empty name, email and password.
    pub fn signup(&self, name: &str, email: &str, password: &str) -> bool {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return false;
        }

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };

        {
            let mut session = self.write();
            session.user = Some(user);
            session.is_authenticated = true;
        }
        self.persist();
        true
    }

    pub fn logout(&self) {
        {
            let mut session = self.write();
            session.user = None;
            session.is_authenticated = false;
        }
        self.persist();
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }
}
