use crate::common::check_errors::CheckError;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Opaque password reference as submitted by the rule form.
///
/// The value is only revealed through a [`SecretResolver`].
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Secret {
    /// password typed directly into the rule
    Explicit(String),
    /// id of an entry in the password store
    Stored(String),
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Explicit(_) => write!(f, "Secret::Explicit(******)"),
            Secret::Stored(id) => write!(f, "Secret::Stored({id})"),
        }
    }
}

pub trait SecretResolver {
    fn resolve(&self, secret: &Secret) -> Result<String, CheckError>;
}

/// Password store keyed by id.
#[derive(Default, Clone)]
pub struct PasswordStore {
    entries: HashMap<String, String>,
}

impl PasswordStore {
    pub fn new(entries: HashMap<String, String>) -> Self {
        PasswordStore { entries }
    }

    /// Load a store from a JSON object mapping ids to passwords.
    pub fn from_file(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)?;
        info!(
            "loaded {} stored passwords from {}",
            entries.len(),
            path.display()
        );
        Ok(PasswordStore::new(entries))
    }
}

impl SecretResolver for PasswordStore {
    fn resolve(&self, secret: &Secret) -> Result<String, CheckError> {
        match secret {
            Secret::Explicit(value) => Ok(value.clone()),
            Secret::Stored(id) => self
                .entries
                .get(id)
                .cloned()
                .ok_or_else(|| CheckError::SecretUnavailable(id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_secret_resolves_without_store() {
        let store = PasswordStore::default();
        let secret = Secret::Explicit("s3cr3t".to_string());
        assert_eq!(store.resolve(&secret).unwrap(), "s3cr3t");
    }

    #[test]
    fn stored_secret_resolves_from_store() {
        let store = PasswordStore::new(HashMap::from([(
            "ftp_login".to_string(),
            "hunter2".to_string(),
        )]));
        let secret = Secret::Stored("ftp_login".to_string());
        assert_eq!(store.resolve(&secret).unwrap(), "hunter2");
    }

    #[test]
    fn missing_stored_secret_is_unavailable() {
        let store = PasswordStore::default();
        let err = store
            .resolve(&Secret::Stored("nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, CheckError::SecretUnavailable(id) if id == "nope"));
    }

    #[test]
    fn debug_hides_explicit_value() {
        let secret = Secret::Explicit("s3cr3t".to_string());
        assert!(!format!("{secret:?}").contains("s3cr3t"));
    }

    #[test]
    fn deserializes_tagged_form() {
        let explicit: Secret = serde_json::from_str(r#"{"explicit": "pw"}"#).unwrap();
        assert_eq!(explicit, Secret::Explicit("pw".to_string()));
        let stored: Secret = serde_json::from_str(r#"{"stored": "id1"}"#).unwrap();
        assert_eq!(stored, Secret::Stored("id1".to_string()));
    }

    #[test]
    fn store_file_must_exist() {
        let err = PasswordStore::from_file(Path::new("/nonexistent/ftpbench/store.json"))
            .err()
            .unwrap();
        assert!(matches!(err, CheckError::Io(_)));
    }
}
