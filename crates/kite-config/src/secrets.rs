use kite_error::KiteError;
use kite_types::policy::Secret;
use std::collections::HashMap;

pub trait SecretGetter {
    fn get_secret(&self, name: &str, namespace: &str) -> Result<Secret, KiteError>;
}

/// In-memory secret lookup keyed by namespace and name
#[derive(Debug, Clone, Default)]
pub struct SecretIndex {
    secrets: HashMap<(String, String), Secret>,
}

impl SecretIndex {
    pub fn new(secrets: impl IntoIterator<Item = Secret>) -> Self {
        let secrets = secrets
            .into_iter()
            .map(|secret| ((secret.namespace.clone(), secret.name.clone()), secret))
            .collect();
        Self { secrets }
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl SecretGetter for SecretIndex {
    fn get_secret(&self, name: &str, namespace: &str) -> Result<Secret, KiteError> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| KiteError::SecretNotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            })
    }
}
