//! Bootstraps one ringcache node: registers a "scores" namespace backed by
//! an in-memory source map and serves it over HTTP, forwarding to peers on
//! a local miss when any are configured.

mod config;

use clap::Parser;
use config::Cli;
use ringcache_core::{loader_fn, new_group, Error};
use ringcache_transport::{server, PeerPool};
use std::collections::HashMap;
use std::sync::Arc;

fn mock_source() -> HashMap<&'static str, &'static str> {
    HashMap::from([("Tom", "630"), ("Jack", "589"), ("Sam", "567")])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let db = mock_source();
    let loader = loader_fn(move |key| {
        tracing::debug!(%key, "[source] searching key");
        db.get(key)
            .map(|v| v.as_bytes().to_vec())
            .ok_or_else(|| Error::SourceMiss(format!("{key} not found")))
    });
    new_group("scores", cli.cache_bytes, loader);

    let pool = Arc::new(PeerPool::new(cli.self_addr.clone()));
    let peers: Vec<String> = cli.peers.into_iter().filter(|p| !p.is_empty()).collect();
    if !peers.is_empty() {
        pool.set(peers);
        if let Some(group) = ringcache_core::get_group("scores") {
            group.register_peers(pool.clone());
        }
    }

    let bind_addr = cli
        .self_addr
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    tracing::info!(addr = %cli.self_addr, "ringcache node listening");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, server::router(pool)).await?;
    Ok(())
}
