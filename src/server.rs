//! HTTP server lifecycle: connect, bind, serve, and release the storage connection.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use mongodb::Client;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::{AppConfig, StoreBackend};
use crate::database;
use crate::post::{InMemoryPostStore, PostService, PostStore};
use crate::router::index::routes;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Server I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Server task failed: {0}")]
    Task(String),
}

/// A running server and the storage connection it holds, if any.
pub struct BlogServer {
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    client: Option<Client>,
    addrs: Vec<SocketAddr>,
}

impl BlogServer {
    /// Open the configured store, bind the listener and start serving.
    ///
    /// Must be called from within an actix system (`#[actix_web::main]` or
    /// `#[actix_web::test]`).
    pub async fn start(config: &AppConfig) -> Result<Self, StartupError> {
        let (store, client) = match config.store {
            StoreBackend::MongoDb => {
                let client = database::connect_to_mongo(&config.database).await?;
                let store: Arc<dyn PostStore> =
                    Arc::new(PostService::new(&client, &config.database.name));
                (store, Some(client))
            }
            StoreBackend::Memory => {
                log::warn!("Using in-memory post store; posts are lost on shutdown");
                let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());
                (store, None)
            }
        };
        let store = web::Data::from(store);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(store.clone())
                .configure(routes)
        })
        .bind((config.host.as_str(), config.port))?;

        let addrs = server.addrs();
        let server = server.run();
        let handle = server.handle();
        let task = actix_web::rt::spawn(server);

        log::info!("Listening on {:?}", addrs);

        Ok(Self {
            handle,
            task,
            client,
            addrs,
        })
    }

    /// Addresses the listener is bound to; useful when binding port 0.
    pub fn addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }

    /// Stop accepting requests, drain in-flight ones and close the connection.
    pub async fn stop(self) -> Result<(), StartupError> {
        self.handle.stop(true).await;
        Self::finish(self.task, self.client).await
    }

    /// Serve until the process receives a shutdown signal.
    pub async fn wait(self) -> Result<(), StartupError> {
        Self::finish(self.task, self.client).await
    }

    async fn finish(
        task: JoinHandle<io::Result<()>>,
        client: Option<Client>,
    ) -> Result<(), StartupError> {
        let served = task.await.map_err(|e| StartupError::Task(e.to_string()));
        if let Some(client) = client {
            client.shutdown().await;
            log::info!("Storage connection released");
        }
        served??;
        Ok(())
    }
}
