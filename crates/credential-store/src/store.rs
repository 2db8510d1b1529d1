//! JSON-file credential storage with merge semantics.

use crate::error::CredentialError;
use crate::types::Credential;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_FILE_NAME: &str = ".now.json";

/// File-backed credential store.
///
/// The file is a JSON object; `merge` overwrites only the `email` and
/// `token` keys so that unrelated configuration living in the same file
/// survives a re-login.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location in the user's home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_FILE_NAME))
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored credential, if any.
    ///
    /// A missing file or a file without a token both read as `None`.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<Option<Credential>, CredentialError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&contents)?;
        let email = value.get("email").and_then(Value::as_str);
        let token = value.get("token").and_then(Value::as_str);

        match (email, token) {
            (Some(email), Some(token)) if !token.is_empty() => {
                Ok(Some(Credential::new(email, token)))
            }
            _ => Ok(None),
        }
    }

    /// Merge `credential` into the store, creating the file if needed.
    #[instrument(skip(self, credential))]
    pub fn merge(&self, credential: &Credential) -> Result<(), CredentialError> {
        let mut object = self.read_object()?;
        object.insert("email".into(), Value::String(credential.email.clone()));
        object.insert("token".into(), Value::String(credential.token.clone()));

        let contents = serde_json::to_string_pretty(&Value::Object(object))?;
        fs::write(&self.path, contents)?;
        self.restrict_permissions()?;

        debug!("Credentials written to {}", self.path.display());
        Ok(())
    }

    /// Read the backing file as a JSON object, or an empty object when
    /// the file is missing or holds anything other than an object.
    fn read_object(&self) -> Result<Map<String, Value>, CredentialError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(object)) => Ok(object),
                _ => Ok(Map::new()),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// The token is a durable secret; keep the file owner-only.
    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<(), CredentialError> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<(), CredentialError> {
        Ok(())
    }
}
