use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Birthday Bliss card service
#[derive(Debug, Parser)]
#[command(name = "bliss", about = "Serves AI-generated birthday messages and songs")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "bliss.toml", env = "BLISS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "BLISS_LISTEN")]
    pub listen: Option<SocketAddr>,
}
