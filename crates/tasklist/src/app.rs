//! The App: one store and one server, constructed once per process.

use std::future::Future;

use axum::Router;
use tasklist_http::{bind, router, serve, Handlers, ServerConfig};
use tasklist_store::{MemoryStore, Store};

use crate::config::AppConfig;
use crate::error::Result;

/// A Tasklist instance.
///
/// Owns the store for the lifetime of the process and hands every request
/// handler a shared handle to it.
pub struct App<S: Store = MemoryStore> {
    handlers: Handlers<S>,
    server: ServerConfig,
}

impl App<MemoryStore> {
    /// Create an app with an in-memory store built from `config`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = MemoryStore::with_config(config.store)?;
        Ok(Self::with_store(store, config.server))
    }
}

impl<S: Store + 'static> App<S> {
    /// Create an app over an existing store.
    pub fn with_store(store: S, server: ServerConfig) -> Self {
        Self {
            handlers: Handlers::new(store),
            server,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        self.handlers.store()
    }

    /// Get the request handlers.
    pub fn handlers(&self) -> &Handlers<S> {
        &self.handlers
    }

    /// The listening configuration.
    pub fn server_config(&self) -> &ServerConfig {
        &self.server
    }

    /// The HTTP router for this app.
    pub fn router(&self) -> Router {
        router(self.handlers.clone())
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = bind(&self.server).await?;
        serve(listener, self.router(), shutdown).await?;
        Ok(())
    }
}
