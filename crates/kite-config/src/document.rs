use crate::backend::translate_tls_config;
use crate::backend_policy::resolve_upstream_ssl_config;
use crate::secrets::SecretIndex;
use kite_error::KiteError;
use kite_types::policy::PolicyDocument;
use kite_types::tls::UpstreamTlsDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Upstream descriptors keyed by the object they were translated from
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct TranslatedDocument {
    pub backends: BTreeMap<String, UpstreamTlsDescriptor>,
    pub backend_tls_policies: BTreeMap<String, UpstreamTlsDescriptor>,
}

pub trait PolicyDocumentExt: Sized {
    fn from_yaml(s: &str) -> Result<Self, KiteError>;
    fn from_file(path: &str) -> Result<Self, KiteError>;
    fn translate_all(&self) -> Result<TranslatedDocument, KiteError>;
}

impl PolicyDocumentExt for PolicyDocument {
    fn from_yaml(s: &str) -> Result<Self, KiteError> {
        serde_yaml_ng::from_str(s).map_err(|e| KiteError::ParseError(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, KiteError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KiteError::IoError(format!("{}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    /// Stops at the first object that fails to translate
    fn translate_all(&self) -> Result<TranslatedDocument, KiteError> {
        let secrets = SecretIndex::new(self.secrets.iter().cloned());
        let mut translated = TranslatedDocument::default();

        for backend in &self.backends {
            let namespace = backend.namespace.as_deref().unwrap_or(&self.namespace);
            let upstream = translate_tls_config(&secrets, &backend.tls, namespace)
                .map_err(|e| e.for_object(format!("backend/{}", backend.name)))?;
            debug!(backend = %backend.name, "translated backend TLS");
            translated.backends.insert(backend.name.clone(), upstream);
        }

        for policy in &self.backend_tls_policies {
            let object = format!("backend_tls_policy/{}", policy.name);
            let config_map = self
                .config_maps
                .iter()
                .find(|cm| cm.name == policy.config_map)
                .ok_or_else(|| {
                    KiteError::ParseError(format!("config map {} not found", policy.config_map))
                        .for_object(object.clone())
                })?;
            let upstream = resolve_upstream_ssl_config(
                &config_map.data,
                policy.subject_alt_names.as_deref(),
                &policy.hostname,
            )
            .map_err(|e| e.for_object(object))?;
            debug!(policy = %policy.name, "translated backend TLS policy");
            translated
                .backend_tls_policies
                .insert(policy.name.clone(), upstream);
        }

        Ok(translated)
    }
}
