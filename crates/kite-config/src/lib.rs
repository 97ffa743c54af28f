pub mod backend;
pub mod backend_policy;
pub mod document;
pub mod parameters;
pub mod secrets;

#[cfg(test)]
pub(crate) mod test_support;

pub use backend::{create_secret_provider, translate_tls_config};
pub use backend_policy::{resolve_common_ssl_config, resolve_upstream_ssl_config};
pub use document::{PolicyDocumentExt, TranslatedDocument};
pub use secrets::{SecretGetter, SecretIndex};
