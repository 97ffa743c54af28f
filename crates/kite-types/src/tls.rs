use serde::{Deserialize, Serialize};

/// Where the proxy reads a piece of TLS material from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Path on the proxy's filesystem
    #[serde(rename = "filename")]
    FileReference(String),
    /// Literal content embedded in the descriptor
    #[serde(rename = "inline_string")]
    InlineContent(String),
}

impl DataSource {
    /// The path or literal carried by this source
    pub fn value(&self) -> &str {
        match self {
            DataSource::FileReference(v) | DataSource::InlineContent(v) => v,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, DataSource::InlineContent(_))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsProtocol {
    #[default]
    #[serde(rename = "TLS_AUTO")]
    Auto,
    #[serde(rename = "TLSv1_0")]
    V1_0,
    #[serde(rename = "TLSv1_1")]
    V1_1,
    #[serde(rename = "TLSv1_2")]
    V1_2,
    #[serde(rename = "TLSv1_3")]
    V1_3,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct TlsParameters {
    pub cipher_suites: Vec<String>,
    pub ecdh_curves: Vec<String>,
    pub tls_minimum_protocol_version: TlsProtocol,
    pub tls_maximum_protocol_version: TlsProtocol,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SanType {
    #[serde(rename = "DNS")]
    Dns,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StringMatcher {
    #[serde(rename = "exact")]
    Exact(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SanMatcher {
    pub san_type: SanType,
    pub matcher: StringMatcher,
}

/// How the peer certificate is checked. Exactly one mode is active.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// No validation context at all
    #[default]
    None,
    /// Validation context present but without a trust anchor
    SkipVerify,
    Trusted {
        trusted_ca: DataSource,
        san_matchers: Vec<SanMatcher>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CertificatePair {
    pub certificate_chain: DataSource,
    pub private_key: DataSource,
}

/// Serializer-ready TLS configuration for one side of a connection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct TlsContextDescriptor {
    pub tls_params: TlsParameters,
    pub alpn_protocols: Vec<String>,
    pub certificate_pair: Option<CertificatePair>,
    pub validation: ValidationMode,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpstreamTlsDescriptor {
    pub common_tls_context: TlsContextDescriptor,
    pub sni: String,
    pub allow_renegotiation: bool,
}
