//! Assembly of upstream TLS context descriptors.
//!
//! Certificate material arrives as already-resolved PEM strings through a
//! [`CertificateSource`]. The builder validates and normalizes it, attaches
//! trust settings, and produces a [`TlsContextDescriptor`] that a serializer
//! can render into the proxy's native configuration.
pub mod assemble;
pub mod context;
pub mod data_source;
pub mod provider;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use assemble::{TlsContextSpec, assemble};
pub use context::{CommonTlsContextBuilder, create_upstream_tls_context};
pub use data_source::{data_source_generator, file_data_source, inline_data_source};
pub use provider::CertificateSource;
pub use validation::{create_san_matchers, validate_and_clean_cert_key_pair, validate_ca_secret};

pub use kite_types::tls::{TlsContextDescriptor, UpstreamTlsDescriptor};
