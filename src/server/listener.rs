use std::path::PathBuf;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr).await.with_context(|| {
        format!("cannot listen on {addr} (ports below 1024 usually require elevated privileges)")
    })?;
    info!("Listening on {}", addr);

    serve(listener, cfg.root.clone()).await
}

/// Accept loop over an already-bound listener.
///
/// A failed accept is logged and the loop keeps accepting; one bad
/// connection must not take the server down.
pub async fn serve(listener: TcpListener, root: PathBuf) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((socket, peer)) => {
                info!("Accepted connection from {}", peer);

                let root = root.clone();
                tokio::spawn(async move {
                    let conn = Connection::new(socket, peer, root);
                    if let Err(e) = conn.run().await {
                        tracing::error!("Connection error from {}: {}", peer, e);
                    }
                });
            }
            Err(e) => {
                tracing::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
