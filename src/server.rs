//! Lifecycle of the demo responder: bind, serve, drain on signal.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::create_router;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerState {
    Listening,
    Stopped,
}

/// A bound listener. Returned from [`DemoServer::bind`] and consumed by
/// [`DemoServer::serve_until`], so the handle that shuts down is always the
/// one that was opened.
pub struct DemoServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: watch::Sender<ServerState>,
}

impl DemoServer {
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let address = config.address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                addr: address.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;
        let (state, _) = watch::channel(ServerState::Listening);

        info!("App listening at http://{}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            state,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Observe Listening -> Stopped.
    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Serve `GET /` until `shutdown` resolves, then stop accepting and let
    /// in-flight requests finish before returning.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.serve_app(create_router(), shutdown).await
    }

    async fn serve_app<F>(self, app: Router, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let make_service = app.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(self.listener, make_service)
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("termination signal received: closing HTTP server");
            })
            .await?;

        self.state.send_replace(ServerState::Stopped);
        info!("HTTP server closed");
        Ok(())
    }
}

/// Resolves on SIGTERM, or Ctrl-C.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::time::Duration;
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;
    use tokio::time::sleep;

    fn local() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn serves_root_then_stops() {
        let server = DemoServer::bind(&local()).await.unwrap();
        let addr = server.local_addr();
        let state = server.state();
        assert_eq!(*state.borrow(), ServerState::Listening);

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_until(async {
            let _ = rx.await;
        }));

        let body = reqwest::Client::new()
            .get(format!("http://{addr}/"))
            .header("x-forwarded-for", "203.0.113.5")
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("Your IP: 203.0.113.5"));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();

        assert_eq!(*state.borrow(), ServerState::Stopped);
        assert!(TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn in_flight_request_completes_after_shutdown() {
        let server = DemoServer::bind(&local()).await.unwrap();
        let addr = server.local_addr();

        let app = Router::new().route(
            "/slow",
            get(|| async {
                sleep(Duration::from_millis(300)).await;
                "done"
            }),
        );

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_app(app, async {
            let _ = rx.await;
        }));

        let request = tokio::spawn(async move {
            reqwest::get(format!("http://{addr}/slow"))
                .await?
                .text()
                .await
        });

        sleep(Duration::from_millis(100)).await;
        tx.send(()).unwrap();

        let body = request.await.unwrap().unwrap();
        assert_eq!(body, "done");
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let first = DemoServer::bind(&local()).await.unwrap();
        let taken = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: first.local_addr().port(),
        };
        let err = DemoServer::bind(&taken).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
