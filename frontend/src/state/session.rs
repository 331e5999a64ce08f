use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::api::{ApiError, LoginResponse};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "id";
/// One-shot message for the auth page, left behind before a redirect.
pub const NOTICE_KEY: &str = "auth_notice";
/// Profile keys older builds wrote; removed on logout along with the session.
pub const PROFILE_KEYS: [&str; 2] = ["email", "name"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Hr,
    Employee,
}

impl Role {
    /// Only the exact value `"hr"` grants the HR dashboard.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "hr" => Role::Hr,
            "employee" => Role::Employee,
            other => {
                log::warn!("Unrecognised role {:?}; treating as employee", other);
                Role::Employee
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Employee => "employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role,
            user_id: user_id.into(),
        }
    }

    pub fn from_login(response: &LoginResponse) -> Self {
        Self::new(
            response.token.clone(),
            Role::from_stored(&response.role),
            response.id.clone(),
        )
    }

    /// `exp` claim of a JWT token, in seconds since the epoch. Opaque tokens
    /// yield `None`.
    pub fn expires_at(&self) -> Option<i64> {
        decode_exp(&self.token)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

fn decode_exp(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.get("exp").and_then(|v| v.as_i64())
}

pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl StorageBackend for web_sys::Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        web_sys::Storage::get_item(self, key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        web_sys::Storage::set_item(self, key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove_item(&self, key: &str) {
        let _ = web_sys::Storage::remove_item(self, key);
    }
}

/// Durable home of the session: `localStorage` in the browser, memory elsewhere.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_environment() -> Self {
        match crate::utils::storage::local_storage() {
            Ok(storage) => Self::new(Rc::new(storage)),
            Err(err) => {
                log::warn!("{}; session will not survive a reload", err);
                Self::in_memory()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_environment() -> Self {
        Self::in_memory()
    }

    pub fn write(&self, session: &Session) -> Result<(), ApiError> {
        let entries = [
            (TOKEN_KEY, session.token.as_str()),
            (ROLE_KEY, session.role.as_str()),
            (USER_ID_KEY, session.user_id.as_str()),
        ];
        for (key, value) in entries {
            self.backend.set_item(key, value).map_err(ApiError::storage)?;
        }
        Ok(())
    }

    /// Raw persisted role, exactly as stored.
    pub fn stored_role(&self) -> Option<String> {
        self.backend.get_item(ROLE_KEY)
    }

    /// The persisted session, or `None` when any of its keys is missing or blank.
    pub fn read(&self) -> Option<Session> {
        let present = |key: &str| {
            self.backend
                .get_item(key)
                .filter(|value| !value.trim().is_empty())
        };
        let token = present(TOKEN_KEY)?;
        let role = present(ROLE_KEY)?;
        let user_id = present(USER_ID_KEY)?;
        Some(Session::new(token, Role::from_stored(&role), user_id))
    }

    /// Stores a message for the next auth page load.
    pub fn leave_notice(&self, message: &str) -> Result<(), ApiError> {
        self.backend
            .set_item(NOTICE_KEY, message)
            .map_err(ApiError::storage)
    }

    /// Returns the pending notice, if any, and removes it.
    pub fn take_notice(&self) -> Option<String> {
        let notice = self
            .backend
            .get_item(NOTICE_KEY)
            .filter(|text| !text.trim().is_empty());
        self.backend.remove_item(NOTICE_KEY);
        notice
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, ROLE_KEY, USER_ID_KEY]
            .into_iter()
            .chain(PROFILE_KEYS)
        {
            self.backend.remove_item(key);
        }
    }
}
