//! Typed access to the persisted session.
//!
//! Only this module knows the storage keys. Everything else goes through a
//! [`SessionStore`] handed down via Leptos context.

use crate::{config::StorageKind, utils::storage as storage_utils};
use leptos::*;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};
use thiserror::Error;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::User => "Usuário",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The JSON blob kept under [`USER_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StoredUser {
    pub fn new(username: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            username: Some(username.into()),
            role: role.map(|r| r.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("armazenamento indisponível: {0}")]
    Unavailable(String),
    #[error("falha ao gravar '{key}' no armazenamento")]
    Write { key: &'static str },
    #[error("falha ao serializar o usuário: {0}")]
    Encode(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage` / `window.sessionStorage`, resolved on every access.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    kind: StorageKind,
}

impl BrowserStorage {
    pub fn new(kind: StorageKind) -> Self {
        Self { kind }
    }

    fn storage(&self) -> Result<web_sys::Storage, SessionError> {
        storage_utils::storage_for(self.kind).map_err(SessionError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| SessionError::Write { key })
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Configured browser storage, or memory when the browser refuses access.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        let kind = crate::config::session_storage_kind();
        match storage_utils::storage_for(kind) {
            Ok(_) => Self::new(BrowserStorage::new(kind)),
            Err(err) => {
                log::warn!("{}; keeping the session in memory", err);
                Self::in_memory()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn browser() -> Self {
        Self::in_memory()
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<StoredUser> {
        let raw = self.backend.get(USER_KEY)?;
        match serde_json::from_str::<StoredUser>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Ignoring unreadable session user: {}", err);
                None
            }
        }
    }

    pub fn role(&self) -> Option<Role> {
        let raw = self.user()?.role?;
        let role = Role::parse(&raw);
        if role.is_none() {
            log::warn!("Ignoring unknown role '{}'", raw);
        }
        role
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            role: self.role(),
        }
    }

    pub fn set_session(&self, token: &str, user: &StoredUser) -> Result<(), SessionError> {
        let encoded =
            serde_json::to_string(user).map_err(|err| SessionError::Encode(err.to_string()))?;
        self.backend.set(TOKEN_KEY, token)?;
        self.backend.set(USER_KEY, &encoded)
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::browser()
    }
}

pub fn provide_session(store: SessionStore) {
    provide_context(store);
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_default()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_storage_round_trip() {
        for kind in [StorageKind::Local, StorageKind::Session] {
            let store = SessionStore::new(BrowserStorage::new(kind));
            store
                .set_session("jwt", &StoredUser::new("ana", Some(Role::User)))
                .unwrap();
            assert_eq!(store.role(), Some(Role::User));
            store.clear();
            assert!(store.token().is_none());
        }
    }
}
