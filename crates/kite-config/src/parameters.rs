use kite_error::KiteError;
use kite_types::policy::TlsParametersConfig;
use kite_types::tls::{TlsParameters, TlsProtocol};

pub fn parse_tls_version(version: Option<&str>) -> Result<TlsProtocol, KiteError> {
    let Some(version) = version else {
        return Ok(TlsProtocol::Auto);
    };

    match version {
        "1.0" => Ok(TlsProtocol::V1_0),
        "1.1" => Ok(TlsProtocol::V1_1),
        "1.2" => Ok(TlsProtocol::V1_2),
        "1.3" => Ok(TlsProtocol::V1_3),
        "AUTO" => Ok(TlsProtocol::Auto),
        other => Err(KiteError::InvalidTlsVersion(other.to_string())),
    }
}

/// `None` means "keep the proxy defaults"
pub fn parse_tls_parameters(
    parameters: Option<&TlsParametersConfig>,
) -> Result<Option<TlsParameters>, KiteError> {
    let Some(parameters) = parameters else {
        return Ok(None);
    };

    let max_version = parse_tls_version(parameters.tls_max_version.as_deref())?;
    let min_version = parse_tls_version(parameters.tls_min_version.as_deref())?;

    Ok(Some(TlsParameters {
        cipher_suites: parameters.cipher_suites.clone(),
        ecdh_curves: parameters.ecdh_curves.clone(),
        tls_minimum_protocol_version: min_version,
        tls_maximum_protocol_version: max_version,
    }))
}
