use super::dataset::{BoundaryDataset, DatasetError};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Statistics Canada 2021 cartographic boundaries for provinces and territories.
pub const STATCAN_PROVINCES_URL: &str =
    "https://raw.githubusercontent.com/StatCan/geojson/master/2021/province/limits-prov_000b21a_e.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "location")]
pub enum GeographySource {
    Remote(String),
    LocalFile(PathBuf),
    Bundled,
}

impl fmt::Display for GeographySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeographySource::Remote(url) => write!(f, "{url}"),
            GeographySource::LocalFile(path) => write!(f, "{}", path.display()),
            GeographySource::Bundled => f.write_str("bundled outline"),
        }
    }
}

/// Primary source tried at session start and the fixed source used when it is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographySources {
    pub primary: GeographySource,
    pub fallback: GeographySource,
}

impl Default for GeographySources {
    fn default() -> Self {
        Self {
            primary: GeographySource::Remote(STATCAN_PROVINCES_URL.to_string()),
            fallback: GeographySource::Bundled,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum GeographyError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Network seam for boundary datasets.
#[async_trait]
pub trait BoundaryTransport: Send + Sync {
    /// Succeeds when the dataset at `url` is reachable.
    async fn probe(&self, url: &str) -> Result<(), TransportError>;
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn request_error(url: &str, err: reqwest::Error) -> TransportError {
        TransportError::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl BoundaryTransport for HttpTransport {
    async fn probe(&self, url: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|err| Self::request_error(url, err))?;
        if !response.status().is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| Self::request_error(url, err))?;
        if !response.status().is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response
            .text()
            .await
            .map_err(|err| Self::request_error(url, err))
    }
}

/// Handle on the start-of-session availability probe.
#[derive(Debug)]
pub struct SourceProbe {
    receiver: watch::Receiver<GeographySource>,
    task: JoinHandle<()>,
}

impl SourceProbe {
    /// Source to paint with right now; never waits for the probe.
    pub fn current(&self) -> GeographySource {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GeographySource> {
        self.receiver.clone()
    }

    /// Waits for the probe to finish and returns the source it settled on.
    pub async fn settled(self) -> GeographySource {
        if let Err(err) = self.task.await {
            warn!(error = %err, "geography probe task ended abnormally");
        }
        let current = self.receiver.borrow().clone();
        current
    }
}

/// Issues the one-shot probe of the primary source on the current tokio runtime.
pub fn spawn_source_probe<T>(transport: Arc<T>, sources: GeographySources) -> SourceProbe
where
    T: BoundaryTransport + ?Sized + 'static,
{
    let (sender, receiver) = watch::channel(sources.primary.clone());

    let task = tokio::spawn(async move {
        let GeographySource::Remote(url) = &sources.primary else {
            debug!(source = %sources.primary, "primary geography is local; skipping probe");
            return;
        };

        match transport.probe(url).await {
            Ok(()) => debug!(%url, "primary geography reachable"),
            Err(err) => {
                warn!(
                    error = %err,
                    fallback = %sources.fallback,
                    "primary geography unavailable; switching to fallback"
                );
                sender.send_replace(sources.fallback.clone());
            }
        }
    });

    SourceProbe { receiver, task }
}

pub async fn load_dataset<T>(
    transport: &T,
    source: &GeographySource,
) -> Result<BoundaryDataset, GeographyError>
where
    T: BoundaryTransport + ?Sized,
{
    let dataset = match source {
        GeographySource::Remote(url) => BoundaryDataset::from_json(&transport.fetch(url).await?)?,
        GeographySource::LocalFile(path) => BoundaryDataset::from_path(path)?,
        GeographySource::Bundled => BoundaryDataset::bundled()?,
    };
    info!(%source, features = dataset.len(), "boundary dataset loaded");
    Ok(dataset)
}

/// Loads `current`, dropping to the fallback source if that load fails.
pub async fn load_with_fallback<T>(
    transport: &T,
    current: &GeographySource,
    sources: &GeographySources,
) -> Result<(GeographySource, BoundaryDataset), GeographyError>
where
    T: BoundaryTransport + ?Sized,
{
    match load_dataset(transport, current).await {
        Ok(dataset) => Ok((current.clone(), dataset)),
        Err(err) if *current != sources.fallback => {
            warn!(error = %err, source = %current, "boundary load failed; using fallback");
            let dataset = load_dataset(transport, &sources.fallback).await?;
            Ok((sources.fallback.clone(), dataset))
        }
        Err(err) => Err(err),
    }
}
