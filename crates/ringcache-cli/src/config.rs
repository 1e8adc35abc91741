//! CLI arguments bootstrapping a single ringcache node.

use clap::Parser;

/// Bootstrap configuration for one ringcache node.
///
/// Flags are the only configuration surface. Environment variables and
/// on-disk config stay out of `ringcache-core`; this binary is the
/// bootstrap edge, not the core itself.
#[derive(Debug, Parser)]
#[command(name = "ringcache-node", about = "Run a ringcache node")]
pub struct Cli {
    /// This node's own address, e.g. `http://127.0.0.1:9999`. Also the
    /// address peers use to reach this node.
    #[arg(long)]
    pub self_addr: String,

    /// Comma-separated addresses of every peer in the cluster, including
    /// this node's own `self_addr`.
    #[arg(long, value_delimiter = ',', default_value = "")]
    pub peers: Vec<String>,

    /// Byte budget for the demo "scores" namespace (0 = unbounded).
    #[arg(long, default_value_t = 2 << 10)]
    pub cache_bytes: u64,
}
