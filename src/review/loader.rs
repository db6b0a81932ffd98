//! One-shot review fetch.
//!
//! The view loads its reviews exactly once, right after startup. The fetch
//! runs as a background task and reports back through the app event channel
//! with a single `StoreEvent`, so the result is applied on the same loop that
//! handles key presses.

use crate::app::event::AppEvent;
use crate::config::ServerConfig;
use crate::review::model::Review;
use crate::review::store::StoreEvent;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode reviews from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the reviews endpoint.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    client: Client,
    url: String,
}

impl ReviewClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("revgrid/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            url: config.reviews_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET` the endpoint and decode the whole body. There is no partial
    /// result: either every row decodes or the fetch fails.
    pub async fn fetch_reviews(&self) -> Result<Vec<Review>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| LoadError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Network {
            url: self.url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| LoadError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Handle to the background fetch.
pub struct LoadHandle {
    task: JoinHandle<()>,
}

impl LoadHandle {
    /// Abort the fetch if it is still in flight. No-op once it has reported.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start the fetch. Exactly one `AppEvent::Store` is sent when it resolves.
pub fn spawn_load(client: ReviewClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> LoadHandle {
    let task = tokio::spawn(async move {
        info!(url = client.url(), "fetching reviews");
        let event = match client.fetch_reviews().await {
            Ok(rows) => {
                info!(count = rows.len(), "reviews loaded");
                StoreEvent::FetchSucceeded(rows)
            }
            Err(e) => {
                error!(error = %e, "failed to load reviews");
                StoreEvent::FetchFailed {
                    error: e.to_string(),
                }
            }
        };
        // Receiver gone means the view was torn down; nobody needs the rows.
        let _ = event_tx.send(AppEvent::Store(event));
    });
    LoadHandle { task }
}
