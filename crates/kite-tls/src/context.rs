use crate::data_source::data_source_generator;
use crate::provider::CertificateSource;
use crate::validation::{create_san_matchers, validate_and_clean_cert_key_pair};
use kite_error::{ConfigError, KiteError};
use kite_types::tls::{
    CertificatePair, DataSource, SanMatcher, TlsContextDescriptor, TlsParameters,
    UpstreamTlsDescriptor, ValidationMode,
};
use tracing::debug;

#[derive(Debug, Clone)]
struct TrustedContext {
    trusted_ca: DataSource,
    san_matchers: Vec<SanMatcher>,
}

/// Builds a [`TlsContextDescriptor`] step by step.
///
/// Every step consumes the builder, so a failed step leaves nothing behind to
/// keep chaining on. The validation mode is decided in [`build`] from the
/// collected inputs rather than from call order: one-way TLS beats insecure
/// skip-verify, which beats a trusted CA.
///
/// [`build`]: CommonTlsContextBuilder::build
#[derive(Debug, Default)]
pub struct CommonTlsContextBuilder {
    context: TlsContextDescriptor,
    trusted: Option<TrustedContext>,
    insecure_skip_verify: bool,
    one_way_tls: bool,
}

impl CommonTlsContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tls_parameters(mut self, params: Option<TlsParameters>) -> Self {
        if let Some(params) = params {
            self.context.tls_params = params;
        }
        self
    }

    /// `None` keeps the current list, `Some(vec![])` clears it
    pub fn with_alpn_protocols(mut self, protocols: Option<Vec<String>>) -> Self {
        if let Some(protocols) = protocols {
            self.context.alpn_protocols = protocols;
        }
        self
    }

    pub fn with_certificates(
        mut self,
        provider: &CertificateSource,
        inline: bool,
    ) -> Result<Self, KiteError> {
        let cert_chain = provider.cert_chain();
        let private_key = provider.private_key();

        if cert_chain.is_empty() && private_key.is_empty() {
            return Ok(self);
        }
        if cert_chain.is_empty() || private_key.is_empty() {
            return Err(ConfigError::IncompleteCertPair.into());
        }

        let cleaned_chain =
            validate_and_clean_cert_key_pair(cert_chain, private_key, provider.root_ca())?;

        let generate = data_source_generator(inline);
        self.context.certificate_pair = Some(CertificatePair {
            certificate_chain: generate(&cleaned_chain),
            private_key: generate(private_key),
        });
        debug!(inline, "certificate pair validated");
        Ok(self)
    }

    pub fn with_validation(
        mut self,
        provider: &CertificateSource,
        san_list: &[String],
        inline: bool,
    ) -> Result<Self, KiteError> {
        let root_ca = provider.root_ca();
        if root_ca.is_empty() && !san_list.is_empty() {
            return Err(ConfigError::MissingRootCAForSAN.into());
        }
        if root_ca.is_empty() {
            return Ok(self);
        }

        let generate = data_source_generator(inline);
        self.trusted = Some(TrustedContext {
            trusted_ca: generate(root_ca),
            san_matchers: create_san_matchers(san_list),
        });
        debug!(inline, sans = san_list.len(), "trusted CA attached");
        Ok(self)
    }

    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.insecure_skip_verify |= skip;
        self
    }

    /// One-way TLS drops any validation context, including skip-verify
    pub fn with_one_way_tls(mut self, one_way: bool) -> Self {
        self.one_way_tls |= one_way;
        self
    }

    pub fn build(self) -> TlsContextDescriptor {
        let mut context = self.context;
        context.validation =
            resolve_validation(self.one_way_tls, self.insecure_skip_verify, self.trusted);
        context
    }
}

fn resolve_validation(
    one_way_tls: bool,
    insecure_skip_verify: bool,
    trusted: Option<TrustedContext>,
) -> ValidationMode {
    if one_way_tls {
        return ValidationMode::None;
    }
    if insecure_skip_verify {
        return ValidationMode::SkipVerify;
    }
    match trusted {
        Some(TrustedContext {
            trusted_ca,
            san_matchers,
        }) => ValidationMode::Trusted {
            trusted_ca,
            san_matchers,
        },
        None => ValidationMode::None,
    }
}

pub fn create_upstream_tls_context(
    common: TlsContextDescriptor,
    sni: impl Into<String>,
    allow_renegotiation: bool,
) -> UpstreamTlsDescriptor {
    UpstreamTlsDescriptor {
        common_tls_context: common,
        sni: sni.into(),
        allow_renegotiation,
    }
}
