use thiserror::Error;

/// Inconsistent TLS inputs detected while assembling a context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TLS config: certChain and privateKey must both be provided")]
    IncompleteCertPair,

    #[error("a root_ca must be provided if verify_subject_alt_name is not empty")]
    MissingRootCAForSAN,

    #[error("no key {0} found")]
    MissingKey(String),
}

/// Certificate material that failed to parse or pair up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("certificate and private key do not form a valid pair: {0}")]
    KeyMismatch(String),

    #[error("certificate chain contains no valid PEM certificate: {0}")]
    MalformedCert(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid TLS version: {0}")]
    InvalidTlsVersion(String),

    #[error("secret {namespace}/{name} not found")]
    SecretNotFound { name: String, namespace: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("{name}: {source}")]
    Object {
        name: String,
        #[source]
        source: Box<KiteError>,
    },
}

impl KiteError {
    /// Attach the name of the object being translated
    pub fn for_object(self, name: impl Into<String>) -> Self {
        KiteError::Object {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
