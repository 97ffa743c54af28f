use std::collections::BTreeMap;

pub const TLS_CERT_KEY: &str = "tls.crt";
pub const TLS_PRIVATE_KEY: &str = "tls.key";
pub const CA_CERT_KEY: &str = "ca.crt";

/// Already-resolved certificate material. An empty string means absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSource {
    /// Well-known keys over a generic string map (config map or secret data)
    Keyed(BTreeMap<String, String>),
    /// Plain strings, e.g. pulled out of a secret or taken from file paths
    Direct {
        cert_chain: String,
        private_key: String,
        root_ca: String,
    },
}

impl CertificateSource {
    pub fn keyed(data: BTreeMap<String, String>) -> Self {
        CertificateSource::Keyed(data)
    }

    pub fn direct(
        cert_chain: impl Into<String>,
        private_key: impl Into<String>,
        root_ca: impl Into<String>,
    ) -> Self {
        CertificateSource::Direct {
            cert_chain: cert_chain.into(),
            private_key: private_key.into(),
            root_ca: root_ca.into(),
        }
    }

    /// A source that supplies nothing
    pub fn empty() -> Self {
        Self::direct("", "", "")
    }

    pub fn cert_chain(&self) -> &str {
        match self {
            CertificateSource::Keyed(data) => lookup(data, TLS_CERT_KEY),
            CertificateSource::Direct { cert_chain, .. } => cert_chain,
        }
    }

    pub fn private_key(&self) -> &str {
        match self {
            CertificateSource::Keyed(data) => lookup(data, TLS_PRIVATE_KEY),
            CertificateSource::Direct { private_key, .. } => private_key,
        }
    }

    pub fn root_ca(&self) -> &str {
        match self {
            CertificateSource::Keyed(data) => lookup(data, CA_CERT_KEY),
            CertificateSource::Direct { root_ca, .. } => root_ca,
        }
    }
}

fn lookup<'a>(data: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    data.get(key).map(String::as_str).unwrap_or_default()
}
