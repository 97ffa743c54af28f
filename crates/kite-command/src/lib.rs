use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    #[command(name = "translate")]
    #[command(about = "Translate a policy file into upstream TLS descriptors (JSON)")]
    Translate {
        #[arg(long, short = 'c', default_value = "/etc/kite/policy.yaml")]
        #[arg(help = "Path to the policy file example: /etc/kite/policy.yaml")]
        config: String,

        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },

    #[command(name = "check-cert")]
    #[command(about = "Validate a certificate/key pair and print the cleaned chain")]
    CheckCert {
        #[arg(long, help = "PEM certificate chain")]
        cert: String,

        #[arg(long, help = "PEM private key")]
        key: String,

        #[arg(long, help = "PEM root CA bundle")]
        ca: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
