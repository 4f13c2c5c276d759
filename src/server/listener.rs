use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Validates `cfg`, binds its listen address and serves until an error.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    cfg.validate().context("server is not setup correctly")?;
    info!("Server setup valid");

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, Arc::new(cfg)).await
}

/// Accepts connections forever, one task per connection.
///
/// A failed accept is logged and skipped.
pub async fn serve(listener: TcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let cfg = Arc::clone(&cfg);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, cfg).with_peer(peer);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
