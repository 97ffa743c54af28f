use crate::provider::CA_CERT_KEY;
use kite_error::{ConfigError, ValidationError};
use kite_types::tls::{SanMatcher, SanType, StringMatcher};
use openssl::pkey::PKey;
use openssl::x509::X509;
use std::collections::BTreeMap;

/// Check that the chain's leaf matches the private key and re-encode the
/// chain as canonical PEM.
///
/// Text around the PEM blocks and non-certificate blocks are dropped, so the
/// output of a successful call is stable under repeated cleaning. When only a
/// root CA is supplied there is nothing to validate and the empty chain is
/// returned untouched.
pub fn validate_and_clean_cert_key_pair(
    cert_chain: &str,
    private_key: &str,
    root_ca: &str,
) -> Result<String, ValidationError> {
    if cert_chain.is_empty() && private_key.is_empty() && !root_ca.is_empty() {
        return Ok(cert_chain.to_string());
    }

    check_key_pair(cert_chain, private_key)?;

    let certs = X509::stack_from_pem(cert_chain.as_bytes())
        .map_err(|e| ValidationError::MalformedCert(e.to_string()))?;
    if certs.is_empty() {
        return Err(ValidationError::MalformedCert(
            "no PEM certificate blocks found".to_string(),
        ));
    }

    let mut cleaned = String::with_capacity(cert_chain.len());
    for cert in &certs {
        let pem = cert
            .to_pem()
            .map_err(|e| ValidationError::MalformedCert(e.to_string()))?;
        cleaned.push_str(&String::from_utf8_lossy(&pem));
    }

    Ok(cleaned)
}

fn check_key_pair(cert_chain: &str, private_key: &str) -> Result<(), ValidationError> {
    let leaf = X509::from_pem(cert_chain.as_bytes()).map_err(|e| {
        ValidationError::KeyMismatch(format!("failed to parse certificate: {}", e))
    })?;
    let key = PKey::private_key_from_pem(private_key.as_bytes()).map_err(|e| {
        ValidationError::KeyMismatch(format!("failed to parse private key: {}", e))
    })?;
    let public_key = leaf.public_key().map_err(|e| {
        ValidationError::KeyMismatch(format!("failed to read certificate public key: {}", e))
    })?;

    if !public_key.public_eq(&key) {
        return Err(ValidationError::KeyMismatch(
            "private key does not match public key".to_string(),
        ));
    }
    Ok(())
}

/// One exact DNS matcher per entry, order preserved
pub fn create_san_matchers(san_list: &[String]) -> Vec<SanMatcher> {
    san_list
        .iter()
        .map(|san| SanMatcher {
            san_type: SanType::Dns,
            matcher: StringMatcher::Exact(san.clone()),
        })
        .collect()
}

pub fn validate_ca_secret(data: &BTreeMap<String, String>) -> Result<String, ConfigError> {
    data.get(CA_CERT_KEY)
        .cloned()
        .ok_or_else(|| ConfigError::MissingKey(CA_CERT_KEY.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::self_signed;

    #[test]
    fn test_skips_validation_when_only_ca_present() {
        let cleaned = validate_and_clean_cert_key_pair("", "", "some-ca").unwrap();
        assert_eq!(cleaned, "");
    }

    #[test]
    fn test_all_empty_is_a_key_mismatch() {
        let err = validate_and_clean_cert_key_pair("", "", "").unwrap_err();
        assert!(matches!(err, ValidationError::KeyMismatch(_)));
    }

    #[test]
    fn test_valid_pair_is_cleaned() {
        let leaf = self_signed("leaf.example.com");
        let cleaned = validate_and_clean_cert_key_pair(&leaf.cert_pem, &leaf.key_pem, "").unwrap();
        assert!(cleaned.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(cleaned.trim_end().ends_with("-----END CERTIFICATE-----"));
        assert_eq!(cleaned.matches("BEGIN CERTIFICATE").count(), 1);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let leaf = self_signed("leaf.example.com");
        let intermediate = self_signed("intermediate.example.com");
        let chain = format!("{}{}", leaf.cert_pem, intermediate.cert_pem);

        let once = validate_and_clean_cert_key_pair(&chain, &leaf.key_pem, "").unwrap();
        let twice = validate_and_clean_cert_key_pair(&once, &leaf.key_pem, "").unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.matches("BEGIN CERTIFICATE").count(), 2);
    }

    #[test]
    fn test_cleaning_drops_surrounding_text() {
        let leaf = self_signed("leaf.example.com");
        let noisy = format!("# issued for leaf\n{}\n\ntrailing notes\n", leaf.cert_pem);

        let cleaned = validate_and_clean_cert_key_pair(&noisy, &leaf.key_pem, "").unwrap();
        let reference = validate_and_clean_cert_key_pair(&leaf.cert_pem, &leaf.key_pem, "").unwrap();
        assert_eq!(cleaned, reference);
        assert!(!cleaned.contains("issued for leaf"));
        assert!(!cleaned.contains("trailing notes"));
    }

    #[test]
    fn test_chain_order_is_preserved() {
        let leaf = self_signed("leaf.example.com");
        let intermediate = self_signed("intermediate.example.com");

        let leaf_only = validate_and_clean_cert_key_pair(&leaf.cert_pem, &leaf.key_pem, "").unwrap();
        let chain = format!("{}{}", leaf.cert_pem, intermediate.cert_pem);
        let cleaned = validate_and_clean_cert_key_pair(&chain, &leaf.key_pem, "").unwrap();
        assert!(cleaned.starts_with(&leaf_only));
    }

    #[test]
    fn test_mismatched_key() {
        let leaf = self_signed("leaf.example.com");
        let other = self_signed("other.example.com");
        let err = validate_and_clean_cert_key_pair(&leaf.cert_pem, &other.key_pem, "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::KeyMismatch("private key does not match public key".to_string())
        );
    }

    #[test]
    fn test_unparsable_material_is_a_key_mismatch() {
        let leaf = self_signed("leaf.example.com");
        let err = validate_and_clean_cert_key_pair("not a cert", &leaf.key_pem, "").unwrap_err();
        assert!(matches!(err, ValidationError::KeyMismatch(_)));

        let err = validate_and_clean_cert_key_pair(&leaf.cert_pem, "not a key", "").unwrap_err();
        assert!(matches!(err, ValidationError::KeyMismatch(_)));
    }

    #[test]
    fn test_corrupt_trailing_block_is_malformed() {
        let leaf = self_signed("leaf.example.com");
        let chain = format!(
            "{}-----BEGIN CERTIFICATE-----\nbm90IGEgY2VydGlmaWNhdGU=\n-----END CERTIFICATE-----\n",
            leaf.cert_pem
        );
        let err = validate_and_clean_cert_key_pair(&chain, &leaf.key_pem, "").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedCert(_)));
    }

    #[test]
    fn test_create_san_matchers() {
        let sans = vec!["a.example.com".to_string(), "b.example.com".to_string()];
        let matchers = create_san_matchers(&sans);
        assert_eq!(matchers.len(), 2);
        assert_eq!(matchers[0].san_type, SanType::Dns);
        assert_eq!(
            matchers[0].matcher,
            StringMatcher::Exact("a.example.com".to_string())
        );
        assert_eq!(matchers[1].san_type, SanType::Dns);
        assert_eq!(
            matchers[1].matcher,
            StringMatcher::Exact("b.example.com".to_string())
        );

        assert!(create_san_matchers(&[]).is_empty());
    }

    #[test]
    fn test_validate_ca_secret() {
        let mut data = BTreeMap::new();
        assert_eq!(
            validate_ca_secret(&data),
            Err(ConfigError::MissingKey("ca.crt".to_string()))
        );

        data.insert("ca.crt".to_string(), "ca-pem".to_string());
        assert_eq!(validate_ca_secret(&data).unwrap(), "ca-pem");
    }
}
