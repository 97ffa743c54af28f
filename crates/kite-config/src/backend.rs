use crate::parameters::parse_tls_parameters;
use crate::secrets::SecretGetter;
use kite_error::KiteError;
use kite_tls::provider::{CA_CERT_KEY, TLS_CERT_KEY, TLS_PRIVATE_KEY};
use kite_tls::{CertificateSource, CommonTlsContextBuilder, create_upstream_tls_context};
use kite_types::policy::BackendTlsConfig;
use kite_types::tls::UpstreamTlsDescriptor;
use tracing::debug;

/// Translate a backend's TLS block into an upstream descriptor.
///
/// Material referenced through a secret is embedded inline; material given as
/// file paths stays a file reference. With `insecure_skip_verify` set the
/// certificate material is not consulted at all.
pub fn translate_tls_config(
    secret_getter: &impl SecretGetter,
    tls: &BackendTlsConfig,
    namespace: &str,
) -> Result<UpstreamTlsDescriptor, KiteError> {
    let provider = create_secret_provider(tls, secret_getter, namespace)?;
    let tls_params = parse_tls_parameters(tls.parameters.as_ref())?;

    let mut builder = CommonTlsContextBuilder::new()
        .with_tls_parameters(tls_params)
        .with_alpn_protocols(tls.alpn_protocols.clone());

    if tls.insecure_skip_verify.unwrap_or(false) {
        builder = builder.with_insecure_skip_verify(true);
    } else {
        let inline = tls.secret_ref.is_some();
        builder = builder
            .with_certificates(&provider, inline)?
            .with_validation(&provider, &tls.verify_subject_alt_name, inline)?;
    }

    let common = builder
        .with_one_way_tls(tls.one_way_tls.unwrap_or(false))
        .build();

    Ok(create_upstream_tls_context(
        common,
        tls.sni.clone().unwrap_or_default(),
        tls.allow_renegotiation.unwrap_or(false),
    ))
}

pub fn create_secret_provider(
    tls: &BackendTlsConfig,
    secret_getter: &impl SecretGetter,
    namespace: &str,
) -> Result<CertificateSource, KiteError> {
    if let Some(secret_ref) = &tls.secret_ref {
        let secret = secret_getter.get_secret(&secret_ref.name, namespace)?;
        debug!(secret = %secret_ref.name, namespace, "using secret certificate source");
        let field = |key: &str| secret.data.get(key).cloned().unwrap_or_default();
        return Ok(CertificateSource::direct(
            field(TLS_CERT_KEY),
            field(TLS_PRIVATE_KEY),
            field(CA_CERT_KEY),
        ));
    }

    if let Some(files) = &tls.files {
        return Ok(CertificateSource::direct(
            files.tls_certificate.clone().unwrap_or_default(),
            files.tls_key.clone().unwrap_or_default(),
            files.root_ca.clone().unwrap_or_default(),
        ));
    }

    Ok(CertificateSource::empty())
}
