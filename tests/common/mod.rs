//! Shared utilities for integration testing.

use std::net::SocketAddr;

use currency_router::config::ServerConfig;
use currency_router::lifecycle::Shutdown;
use currency_router::{rates, HttpServer};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the rate server with the default route table.
pub async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, rates::route_table().unwrap());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestServer { addr, shutdown, client }
}
