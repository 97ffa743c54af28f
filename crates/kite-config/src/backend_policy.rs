use kite_error::{ConfigError, KiteError};
use kite_tls::provider::CA_CERT_KEY;
use kite_tls::{
    CertificateSource, CommonTlsContextBuilder, create_san_matchers, create_upstream_tls_context,
    inline_data_source, validate_ca_secret,
};
use kite_types::tls::{TlsContextDescriptor, UpstreamTlsDescriptor, ValidationMode};
use std::collections::BTreeMap;

pub fn resolve_upstream_ssl_config(
    data: &BTreeMap<String, String>,
    validation_sans: Option<&[String]>,
    sni: &str,
) -> Result<UpstreamTlsDescriptor, KiteError> {
    let common = resolve_common_ssl_config(data, validation_sans)?;
    Ok(create_upstream_tls_context(common, sni, false))
}

/// Trust the `ca.crt` entry of a config map.
///
/// `validation_sans` replaces the plain trusted context with one that also
/// matches the given SANs; it needs a non-empty CA.
pub fn resolve_common_ssl_config(
    data: &BTreeMap<String, String>,
    validation_sans: Option<&[String]>,
) -> Result<TlsContextDescriptor, KiteError> {
    let ca_crt = validate_ca_secret(data)?;
    let provider = CertificateSource::keyed(data.clone());

    let mut common = CommonTlsContextBuilder::new()
        .with_validation(&provider, &[], true)?
        .build();

    if let Some(sans) = validation_sans {
        if ca_crt.is_empty() {
            return Err(ConfigError::MissingKey(CA_CERT_KEY.to_string()).into());
        }
        common.validation = ValidationMode::Trusted {
            trusted_ca: inline_data_source(&ca_crt),
            san_matchers: create_san_matchers(sans),
        };
    }

    Ok(common)
}
