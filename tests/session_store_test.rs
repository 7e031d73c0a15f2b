//! File-backed session storage: durability across process restarts.

use std::sync::Arc;

use tempfile::TempDir;

use dalu_cli::auth::{FileSessionStore, Session, SessionData, SessionStore};
use dalu_cli::models::Usuario;

fn sample_session() -> SessionData {
    SessionData {
        access_token: "abc123".to_string(),
        usuario: Usuario {
            id: 1,
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            rol: Some("admin".to_string()),
            empresa_id: Some(7),
            activo: Some(true),
        },
        empresa_id: 7,
    }
}

#[test]
fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();

    // First "run" logs in
    {
        let session = Session::new(Arc::new(FileSessionStore::new(dir.path().to_path_buf())));
        session.save(&sample_session()).unwrap();
    }

    // Second "run" picks the session up from disk
    let session = Session::new(Arc::new(FileSessionStore::new(dir.path().to_path_buf())));
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert_eq!(session.usuario().unwrap().username, "maria");
    assert_eq!(session.empresa_id(), Some(7));
}

#[test]
fn test_clear_removes_the_session_file() {
    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");

    let session = Session::new(Arc::new(FileSessionStore::new(dir.path().to_path_buf())));
    session.save(&sample_session()).unwrap();
    assert!(session_file.exists());

    session.clear().unwrap();
    assert!(!session_file.exists());

    // Nothing comes back after a restart either
    let session = Session::new(Arc::new(FileSessionStore::new(dir.path().to_path_buf())));
    assert!(!session.is_authenticated());
}

#[test]
fn test_corrupt_session_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    let store = FileSessionStore::new(dir.path().to_path_buf());
    assert_eq!(store.get("access_token"), None);

    // And the store is still writable afterwards
    store.set("access_token", "abc123").unwrap();
    assert_eq!(store.get("access_token").as_deref(), Some("abc123"));
}

#[test]
fn test_remove_persists_to_disk() {
    let dir = TempDir::new().unwrap();

    let store = FileSessionStore::new(dir.path().to_path_buf());
    store.set("access_token", "abc123").unwrap();
    store.set("empresa_id", "7").unwrap();
    store.remove("access_token").unwrap();

    let reopened = FileSessionStore::new(dir.path().to_path_buf());
    assert_eq!(reopened.get("access_token"), None);
    assert_eq!(reopened.get("empresa_id").as_deref(), Some("7"));
}
