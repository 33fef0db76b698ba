//! Server settings, from command-line flags with environment fallbacks.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The front-end bundled with this crate.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Clone, Debug, Parser)]
#[command(name = "othello-server", version, about = "Play one shared game of Othello in the browser")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "OTHELLO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, short, env = "OTHELLO_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory of static front-end files.
    #[arg(long, env = "OTHELLO_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
