pub mod policy;
pub mod tls;
