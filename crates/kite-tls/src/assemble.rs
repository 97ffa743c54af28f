use crate::context::CommonTlsContextBuilder;
use crate::provider::CertificateSource;
use kite_error::KiteError;
use kite_types::tls::{TlsContextDescriptor, TlsParameters};

/// Everything needed to assemble a context in one call
#[derive(Debug, Clone, Default)]
pub struct TlsContextSpec {
    pub tls_params: Option<TlsParameters>,
    pub alpn_protocols: Option<Vec<String>>,
    /// Embed material inline instead of referencing paths
    pub inline: bool,
    pub verify_subject_alt_name: Vec<String>,
    pub insecure_skip_verify: bool,
    pub one_way_tls: bool,
}

/// Validation is `None` for one-way TLS, otherwise `SkipVerify` when
/// insecure, otherwise `Trusted` if the provider has a root CA.
pub fn assemble(
    spec: &TlsContextSpec,
    provider: &CertificateSource,
) -> Result<TlsContextDescriptor, KiteError> {
    let context = CommonTlsContextBuilder::new()
        .with_tls_parameters(spec.tls_params.clone())
        .with_alpn_protocols(spec.alpn_protocols.clone())
        .with_certificates(provider, spec.inline)?
        .with_validation(provider, &spec.verify_subject_alt_name, spec.inline)?
        .with_insecure_skip_verify(spec.insecure_skip_verify)
        .with_one_way_tls(spec.one_way_tls)
        .build();
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::self_signed;
    use kite_error::ConfigError;
    use kite_types::tls::{DataSource, ValidationMode};

    #[test]
    fn test_decision_table() {
        let provider = CertificateSource::direct("", "", "ca-pem");
        let cases = [
            (false, false, "trusted"),
            (false, true, "skip"),
            (true, false, "none"),
            (true, true, "none"),
        ];
        for (one_way_tls, insecure_skip_verify, expected) in cases {
            let spec = TlsContextSpec {
                inline: true,
                one_way_tls,
                insecure_skip_verify,
                ..Default::default()
            };
            let context = assemble(&spec, &provider).unwrap();
            let actual = match context.validation {
                ValidationMode::None => "none",
                ValidationMode::SkipVerify => "skip",
                ValidationMode::Trusted { .. } => "trusted",
            };
            assert_eq!(actual, expected, "one_way={one_way_tls} skip={insecure_skip_verify}");
        }
    }

    #[test]
    fn test_without_ca_validation_is_none() {
        let context = assemble(&TlsContextSpec::default(), &CertificateSource::empty()).unwrap();
        assert_eq!(context.validation, ValidationMode::None);
    }

    #[test]
    fn test_errors_are_returned() {
        let spec = TlsContextSpec {
            verify_subject_alt_name: vec!["a.example.com".to_string()],
            ..Default::default()
        };
        let err = assemble(&spec, &CertificateSource::empty()).unwrap_err();
        assert_eq!(err, KiteError::Config(ConfigError::MissingRootCAForSAN));
    }

    #[test]
    fn test_certificates_and_trust() {
        let leaf = self_signed("leaf.example.com");
        let provider =
            CertificateSource::direct(leaf.cert_pem.clone(), leaf.key_pem.clone(), "ca-pem");
        let spec = TlsContextSpec {
            inline: true,
            alpn_protocols: Some(vec!["h2".to_string()]),
            verify_subject_alt_name: vec!["leaf.example.com".to_string()],
            ..Default::default()
        };
        let context = assemble(&spec, &provider).unwrap();

        let pair = context.certificate_pair.unwrap();
        assert_eq!(pair.private_key, DataSource::InlineContent(leaf.key_pem));
        assert_eq!(context.alpn_protocols, vec!["h2"]);
        let ValidationMode::Trusted { san_matchers, .. } = context.validation else {
            panic!("expected trusted validation");
        };
        assert_eq!(san_matchers.len(), 1);
    }
}
