//! Application state: storage-backed auth token plus the shopper's cart.
//!
//! The storefront keeps its bearer token in browser storage under one of
//! two keys. [`KeyValueStore`] abstracts that storage and [`Session`] owns
//! it together with the cart, so nothing reads ambient globals.

use std::collections::HashMap;
use std::path::Path;

use crate::cart::Cart;
use crate::ConfigError;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "hv_token";
/// Storage key holding the logged-in user as JSON.
pub const USER_KEY: &str = "hv_user";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`], optionally seeded from a JSON object file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON object of string keys. String values are stored as-is;
    /// any other value is stored as its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SessionFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content).map_err(|e| ConfigError::SessionFileParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Parses the same format as [`MemoryStore::load`] from a string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `json` is not an object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let entries = map
            .into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect();
        Ok(Self { entries })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Resolves the bearer token from storage.
///
/// `hv_token` wins. Otherwise `hv_user` is read as JSON and its
/// `acessToken` (the backend's spelling) or `Token` field is used. Missing
/// or malformed data yields `None`.
#[must_use]
pub fn resolve_token<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    if let Some(token) = store.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    let raw = store.get(USER_KEY)?;
    let user: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "stored user is not valid JSON");
            return None;
        }
    };

    ["acessToken", "Token"]
        .iter()
        .filter_map(|field| user.get(field).and_then(serde_json::Value::as_str))
        .find(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Explicit application state container.
#[derive(Debug, Default)]
pub struct Session<S> {
    store: S,
    cart: Cart,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cart: Cart::new(),
        }
    }

    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        resolve_token(&self.store)
    }

    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.store.set(TOKEN_KEY, token.into());
    }

    /// Forgets both the raw token and the stored user.
    pub fn clear_auth(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> MemoryStore {
        let mut s = MemoryStore::new();
        for (k, v) in pairs {
            s.set(k, (*v).to_string());
        }
        s
    }

    #[test]
    fn raw_token_key_wins() {
        let s = store(&[("hv_token", "raw"), ("hv_user", r#"{"acessToken":"user"}"#)]);
        assert_eq!(resolve_token(&s).as_deref(), Some("raw"));
    }

    #[test]
    fn falls_back_to_user_access_token_then_token() {
        let s = store(&[("hv_user", r#"{"acessToken":"a1"}"#)]);
        assert_eq!(resolve_token(&s).as_deref(), Some("a1"));

        let s = store(&[("hv_user", r#"{"Token":"t1"}"#)]);
        assert_eq!(resolve_token(&s).as_deref(), Some("t1"));
    }

    #[test]
    fn malformed_or_missing_user_yields_none() {
        assert!(resolve_token(&store(&[("hv_user", "{not json")])).is_none());
        assert!(resolve_token(&store(&[("hv_user", "null")])).is_none());
        assert!(resolve_token(&MemoryStore::new()).is_none());
    }

    #[test]
    fn empty_raw_token_falls_through() {
        let s = store(&[("hv_token", ""), ("hv_user", r#"{"Token":"t2"}"#)]);
        assert_eq!(resolve_token(&s).as_deref(), Some("t2"));
    }

    #[test]
    fn from_json_str_keeps_nested_objects_as_json_text() {
        let s = MemoryStore::from_json_str(
            r#"{"hv_user": {"acessToken": "nested"}, "theme": "dark"}"#,
        )
        .unwrap();
        assert_eq!(s.get("theme").as_deref(), Some("dark"));
        assert_eq!(resolve_token(&s).as_deref(), Some("nested"));
    }

    #[test]
    fn from_json_str_rejects_non_objects() {
        assert!(MemoryStore::from_json_str("[1,2]").is_err());
    }

    #[test]
    fn session_token_accessors() {
        let mut session = Session::new(MemoryStore::new());
        assert!(session.auth_token().is_none());
        session.set_auth_token("abc");
        assert_eq!(session.auth_token().as_deref(), Some("abc"));
        session.clear_auth();
        assert!(session.auth_token().is_none());
    }

    #[test]
    fn session_owns_cart() {
        let mut session = Session::new(MemoryStore::new());
        assert!(session.cart().is_empty());
        session.cart_mut().add(
            &crate::cart::ProductRef {
                id: Some("1".into()),
                name: "Nhẫn".into(),
                price: rust_decimal::Decimal::ONE_HUNDRED,
                image: String::new(),
            },
            1,
        );
        assert_eq!(session.cart().item_count(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MemoryStore::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::SessionFileIo { .. }));
    }
}
