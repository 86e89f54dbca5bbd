use std::sync::Arc;

use elm_server::router::start_server;
use host_data_provider::HostDataLayer;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use crate::fixtures;

pub struct TestContext {
    pub api: Client,
    base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_token("staff-token").await
    }

    pub async fn new_with_token(token: &str) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config();
        let data_layer = HostDataLayer::load(&config.app.host_snapshot_path).unwrap();
        let _handle = tokio::spawn(start_server(listener, config, Arc::new(data_layer)));

        Self {
            api: Client::new(base_url.clone(), token.into()),
            base_url,
            _handle,
        }
    }

    /// Client of the same server authenticating with another token
    pub fn client_with_token(&self, token: &str) -> Client {
        Client::new(self.base_url.clone(), token.into())
    }
}
