//! Kite - upstream TLS context translator
//!
//! Reads backend TLS policies and certificate material and prints the
//! normalized upstream TLS descriptors the proxy data plane consumes.

use kite_command::Commands;
use kite_config::PolicyDocumentExt;
use kite_error::KiteError;
use kite_tls::validate_and_clean_cert_key_pair;
use kite_types::policy::PolicyDocument;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = kite_command::parse();

    match handle_commands(args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Application error: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_commands(command: Commands) -> Result<String, KiteError> {
    match command {
        Commands::Translate { config, pretty } => handle_translate_command(&config, pretty),
        Commands::CheckCert { cert, key, ca } => {
            handle_check_cert_command(&cert, &key, ca.as_deref())
        }
    }
}

fn handle_translate_command(config_path: &str, pretty: bool) -> Result<String, KiteError> {
    info!("Loading policies from: {}", config_path);
    let document = PolicyDocument::from_file(config_path)?;

    let translated = document.translate_all()?;
    info!(
        backends = translated.backends.len(),
        policies = translated.backend_tls_policies.len(),
        "Translation complete"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&translated)
    } else {
        serde_json::to_string(&translated)
    };
    json.map_err(|e| KiteError::ParseError(e.to_string()))
}

fn handle_check_cert_command(
    cert_path: &str,
    key_path: &str,
    ca_path: Option<&str>,
) -> Result<String, KiteError> {
    let cert_chain = read_pem(cert_path)?;
    let private_key = read_pem(key_path)?;
    let root_ca = match ca_path {
        Some(path) => read_pem(path)?,
        None => String::new(),
    };

    let cleaned = validate_and_clean_cert_key_pair(&cert_chain, &private_key, &root_ca)?;
    info!("Certificate pair is valid");
    Ok(cleaned)
}

fn read_pem(path: &str) -> Result<String, KiteError> {
    std::fs::read_to_string(path).map_err(|e| KiteError::IoError(format!("{}: {}", path, e)))
}
