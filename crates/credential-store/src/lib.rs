//! Local persistence for the login credential.
//!
//! The credential lives in a JSON file alongside whatever other settings
//! the user keeps there; writes merge rather than replace.

mod error;
mod store;
mod types;

pub use error::CredentialError;
pub use store::CredentialStore;
pub use types::Credential;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("auth.json"))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_merge_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let credential = Credential::new("user@example.com", "tok-123");
        store.merge(&credential).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, credential);
    }

    #[test]
    fn test_merge_overwrites_previous_credential() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .merge(&Credential::new("old@example.com", "old-token"))
            .unwrap();
        store
            .merge(&Credential::new("new@example.com", "new-token"))
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.email, "new@example.com");
        assert_eq!(loaded.token, "new-token");
    }

    #[test]
    fn test_merge_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(
            &path,
            r#"{"currentTeam": "acme", "email": "old@example.com"}"#,
        )
        .unwrap();

        let store = CredentialStore::new(&path);
        store
            .merge(&Credential::new("user@example.com", "tok-123"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["currentTeam"], "acme");
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["token"], "tok-123");
    }

    #[test]
    fn test_merge_recovers_from_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = CredentialStore::new(&path);
        store
            .merge(&Credential::new("user@example.com", "tok-123"))
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "tok-123");
    }

    #[test]
    fn test_load_ignores_empty_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(&path, r#"{"email": "user@example.com", "token": ""}"#).unwrap();

        let store = CredentialStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .merge(&Credential::new("user@example.com", "tok-123"))
            .unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
