pub(crate) struct TestCert {
    pub cert_pem: String,
    pub key_pem: String,
}

pub(crate) fn self_signed(name: &str) -> TestCert {
    let key_pair = rcgen::KeyPair::generate().unwrap();
    let params = rcgen::CertificateParams::new(vec![name.to_string()]).unwrap();
    let cert = params.self_signed(&key_pair).unwrap();
    TestCert {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    }
}
