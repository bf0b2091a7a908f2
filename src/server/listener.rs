use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::files::StaticHandler;
use crate::http::connection::Connection;

/// Binds the listening socket and accepts connections until the process
/// shuts down.
///
/// Bind failure is fatal and propagates to the caller; a failed accept is
/// logged and the loop continues. Each accepted connection runs on its own
/// task with its own handler clone, so connections never share state.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let handler = StaticHandler::new(&cfg.public_root)?;

    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on http://{}", cfg.listen_addr);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let handler = handler.clone();
        let read_timeout = cfg.read_timeout;
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler, read_timeout);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
