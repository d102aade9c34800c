use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::{lookup_host, TcpListener, TcpSocket};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::Handler;
use crate::site::Site;

const BACKLOG: u32 = 128;
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = Site::from_config(&cfg.content)?;
    let listener = bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {} serving {}",
        listener.local_addr()?,
        site.root.path().display()
    );

    serve(listener, Arc::new(Handler::new(site))).await
}

/// Binds `addr` (host names allowed) with address reuse enabled.
///
/// When a host name resolves to both families the IPv4 address wins, so
/// `localhost` means 127.0.0.1 even where `::1` is listed first.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let candidates: Vec<SocketAddr> = lookup_host(addr).await?.collect();
    let sock_addr = candidates
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("{} did not resolve to an address", addr))?;

    let socket = if sock_addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(sock_addr)?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accept loop. Each connection is handled to completion before the next
/// accept; errors and panics inside a connection are logged and the loop
/// carries on.
pub async fn serve(listener: TcpListener, handler: Arc<Handler>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handler = Arc::clone(&handler);
        let task = tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            conn.run().await
        });

        match task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Connection error from {}: {}", peer, e),
            Err(e) => error!("Connection task for {} failed: {}", peer, e),
        }
    }
}
