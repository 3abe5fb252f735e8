use redis::AsyncCommands;
use redis::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use tokio::sync::mpsc;

use crate::error::{AppError, AppResult};

/// Keys for values the data layer keeps in Redis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Every genre with its display name
    GenreDirectory,
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::GenreDirectory => write!(f, "shelfwise:genres"),
        }
    }
}

/// Opens a Redis client; connections are created lazily per operation
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// A serialized value waiting to be written by the background writer
struct PendingWrite {
    key: String,
    json: String,
    ttl: u64,
}

/// Redis-backed JSON cache with fire-and-forget writes
#[derive(Clone)]
pub struct Cache {
    redis_client: Client,
    write_tx: mpsc::UnboundedSender<PendingWrite>,
}

/// Stops the background writer once queued writes are flushed
pub struct CacheWriterHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl CacheWriterHandle {
    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).await.is_err() {
            tracing::warn!("Cache writer already stopped");
            return;
        }
        tracing::info!("Cache writer shutdown requested");
    }
}

impl Cache {
    /// Creates the cache and spawns its writer task
    pub async fn new(redis_client: Client) -> (Self, CacheWriterHandle) {
        let (write_tx, write_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        tokio::spawn(Self::run_writer(redis_client.clone(), write_rx, shutdown_rx));

        (
            Self {
                redis_client,
                write_tx,
            },
            CacheWriterHandle { shutdown_tx },
        )
    }

    /// Drains write requests until shutdown, then flushes what is left
    async fn run_writer(
        client: Client,
        mut write_rx: mpsc::UnboundedReceiver<PendingWrite>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        tracing::debug!("Cache writer started");

        loop {
            tokio::select! {
                Some(write) = write_rx.recv() => {
                    let key = write.key.clone();
                    if let Err(e) = Self::write(&client, write).await {
                        tracing::error!(error = %e, key = %key, "Cache write failed");
                    }
                }
                _ = shutdown_rx.recv() => {
                    write_rx.close();
                    let mut flushed = 0usize;
                    while let Some(write) = write_rx.recv().await {
                        match Self::write(&client, write).await {
                            Ok(()) => flushed += 1,
                            Err(e) => tracing::error!(error = %e, "Cache flush failed"),
                        }
                    }
                    tracing::info!(flushed, "Cache writer stopped");
                    break;
                }
            }
        }
    }

    async fn write(client: &Client, write: PendingWrite) -> AppResult<()> {
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(write.key, write.json, write.ttl).await?;
        Ok(())
    }

    /// Reads and deserializes a cached value, `None` on a miss
    pub async fn get_from_cache<T: DeserializeOwned>(
        &self,
        key: &CacheKey,
    ) -> AppResult<Option<T>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let cached: Option<String> = conn.get(key.to_string()).await?;

        cached
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    AppError::Internal(format!("Cache deserialization error for {}: {}", key, e))
                })
            })
            .transpose()
    }

    /// Queues a value for writing without waiting on Redis
    pub fn set_in_background<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: u64) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, key = %key, "Cache serialization error");
                return;
            }
        };

        let write = PendingWrite {
            key: key.to_string(),
            json,
            ttl,
        };

        if self.write_tx.send(write).is_err() {
            tracing::warn!(key = %key, "Cache writer is gone, dropping write");
        }
    }
}
