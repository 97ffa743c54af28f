use serde::Deserialize;
use std::collections::BTreeMap;

fn default_namespace() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretRef {
    pub name: String,
}

/// Paths to PEM files already present on the proxy host
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TlsFiles {
    pub tls_certificate: Option<String>,
    pub tls_key: Option<String>,
    pub root_ca: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TlsParametersConfig {
    #[serde(default)]
    pub cipher_suites: Vec<String>,
    #[serde(default)]
    pub ecdh_curves: Vec<String>,
    /// "AUTO", "1.0", "1.1", "1.2" or "1.3"
    pub tls_min_version: Option<String>,
    pub tls_max_version: Option<String>,
}

/// User-facing TLS block of a backend.
///
/// `secret_ref` wins over `files`; when neither is set the backend presents
/// no client certificate and trusts nothing explicitly.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendTlsConfig {
    pub secret_ref: Option<SecretRef>,
    pub files: Option<TlsFiles>,
    pub insecure_skip_verify: Option<bool>,
    pub one_way_tls: Option<bool>,
    #[serde(default)]
    pub verify_subject_alt_name: Vec<String>,
    /// `None` keeps the proxy default; `Some(vec![])` clears ALPN explicitly
    pub alpn_protocols: Option<Vec<String>>,
    pub sni: Option<String>,
    pub allow_renegotiation: Option<bool>,
    pub parameters: Option<TlsParametersConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendItem {
    pub name: String,
    pub namespace: Option<String>,
    pub tls: BackendTlsConfig,
}

/// Upstream validation driven by a CA bundle stored in a config map
#[derive(Debug, Deserialize, Clone)]
pub struct BackendTlsPolicy {
    pub name: String,
    pub config_map: String,
    #[serde(default)]
    pub hostname: String,
    pub subject_alt_names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Secret {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigMap {
    pub name: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PolicyDocument {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub secrets: Vec<Secret>,
    #[serde(default)]
    pub config_maps: Vec<ConfigMap>,
    #[serde(default)]
    pub backends: Vec<BackendItem>,
    #[serde(default)]
    pub backend_tls_policies: Vec<BackendTlsPolicy>,
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            secrets: vec![],
            config_maps: vec![],
            backends: vec![],
            backend_tls_policies: vec![],
        }
    }
}
