//! Session record and the three-slot invariant.
//!
//! A session is the token plus the cached identity (`usuario`) and tenant
//! (`empresa_id`). The three slots are written and cleared together;
//! expiry is only ever discovered from a 401 response, never from a
//! client-side timestamp.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Usuario;

use super::store::SessionStore;

/// Storage key for the bearer token
pub const KEY_ACCESS_TOKEN: &str = "access_token";
/// Storage key for the serialized user record
pub const KEY_USUARIO: &str = "usuario";
/// Storage key for the tenant (empresa) id
pub const KEY_EMPRESA_ID: &str = "empresa_id";

/// What a successful login leaves behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub access_token: String,
    pub usuario: Usuario,
    pub empresa_id: i64,
}

/// Typed facade over a `SessionStore`. Owns the invariant that the three
/// slots are set and cleared together.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persist a freshly authenticated session, all three slots at once.
    pub fn save(&self, data: &SessionData) -> Result<()> {
        let usuario =
            serde_json::to_string(&data.usuario).context("Failed to serialize usuario")?;
        self.store.set(KEY_ACCESS_TOKEN, &data.access_token)?;
        self.store.set(KEY_USUARIO, &usuario)?;
        self.store.set(KEY_EMPRESA_ID, &data.empresa_id.to_string())?;
        Ok(())
    }

    /// Remove every slot. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_ACCESS_TOKEN)
    }

    pub fn usuario(&self) -> Option<Usuario> {
        let raw = self.store.get(KEY_USUARIO)?;
        match serde_json::from_str(&raw) {
            Ok(usuario) => Some(usuario),
            Err(e) => {
                warn!(error = %e, "Stored usuario record is not valid JSON");
                None
            }
        }
    }

    pub fn empresa_id(&self) -> Option<i64> {
        self.store.get(KEY_EMPRESA_ID)?.parse().ok()
    }

    /// True iff a token is currently stored. No network call.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemorySessionStore;

    fn test_data() -> SessionData {
        SessionData {
            access_token: "abc123".to_string(),
            usuario: Usuario {
                id: 1,
                username: "maria".to_string(),
                email: "maria@example.com".to_string(),
                rol: Some("admin".to_string()),
                empresa_id: None,
                activo: None,
            },
            empresa_id: 7,
        }
    }

    fn test_session() -> Session {
        Session::new(Arc::new(MemorySessionStore::new()))
    }

    #[test]
    fn test_save_writes_all_three_slots() {
        let session = test_session();
        session.save(&test_data()).unwrap();

        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(session.usuario().unwrap().username, "maria");
        assert_eq!(session.empresa_id(), Some(7));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_clear_removes_all_three_slots() {
        let session = test_session();
        session.save(&test_data()).unwrap();
        session.clear().unwrap();

        assert_eq!(session.token(), None);
        assert!(session.usuario().is_none());
        assert_eq!(session.empresa_id(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let session = test_session();
        session.save(&test_data()).unwrap();
        session.clear().unwrap();
        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_anonymous_session() {
        let session = test_session();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
