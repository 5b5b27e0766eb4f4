//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use uuid::Uuid;

use document_api::config::ServiceConfig;
use document_api::documents::{Document, MemoryStore};
use document_api::http::HttpServer;
use document_api::lifecycle::Shutdown;

/// A running service instance bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub document_ids: Vec<Uuid>,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn the real server over an in-memory store with the given documents.
pub async fn start_service(mut config: ServiceConfig, documents: Vec<Document>) -> TestService {
    let store = Arc::new(MemoryStore::new());
    let mut document_ids = Vec::new();
    for document in documents {
        document_ids.push(document.id);
        store.insert(document).unwrap();
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();
    config.observability.metrics_enabled = false;

    let shutdown = Shutdown::new();
    let server = HttpServer::with_store(config, store).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        shutdown,
        document_ids,
    }
}

/// Two documents with stable ordering (list sorts by path).
#[allow(dead_code)]
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("/files/alpha.txt"),
        Document::new("/files/beta.txt"),
    ]
}
