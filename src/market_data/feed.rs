use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::PriceSource;
use crate::error::Result;
use crate::models::PriceSnapshot;

/// Sequence number handed out before a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// The snapshot currently held by a [`PriceFeed`].
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub snapshot: Arc<PriceSnapshot>,
    pub sequence: u64,
    pub fetched_at: DateTime<Utc>,
}

/// Holds the most recently fetched snapshot for callers that want one.
///
/// Every fetch takes a ticket up front. A result is committed only if its
/// ticket is newer than the one already committed, so a slow response can't
/// overwrite a snapshot from a request issued after it.
pub struct PriceFeed {
    source: Arc<dyn PriceSource>,
    next_sequence: AtomicU64,
    current: Mutex<Option<FeedEntry>>,
}

impl PriceFeed {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            next_sequence: AtomicU64::new(1),
            current: Mutex::new(None),
        }
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_sequence.fetch_add(1, Ordering::SeqCst))
    }

    /// Install `snapshot` unless a newer ticket has already landed.
    /// Returns whether the snapshot was installed.
    pub async fn commit(&self, ticket: FetchTicket, snapshot: PriceSnapshot) -> bool {
        let mut current = self.current.lock().await;
        if let Some(entry) = current.as_ref() {
            if entry.sequence >= ticket.0 {
                warn!(
                    source = self.source.name(),
                    stale = ticket.0,
                    committed = entry.sequence,
                    "discarding stale price snapshot"
                );
                return false;
            }
        }

        info!(
            source = self.source.name(),
            sequence = ticket.0,
            symbols = snapshot.len(),
            "price snapshot committed"
        );
        *current = Some(FeedEntry {
            snapshot: Arc::new(snapshot),
            sequence: ticket.0,
            fetched_at: Utc::now(),
        });
        true
    }

    /// Fetch from the source and commit the result.
    ///
    /// Returns the snapshot held afterwards, which is a newer one than this
    /// fetch produced if that one arrived late. On failure the held snapshot
    /// is left as it was.
    pub async fn refresh(&self) -> Result<Arc<PriceSnapshot>> {
        let ticket = self.begin_fetch();
        debug!(source = self.source.name(), sequence = ticket.0, "refreshing prices");

        let snapshot = match self.source.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(source = self.source.name(), error = %err, "price refresh failed");
                return Err(err);
            }
        };

        let fresh = Arc::new(snapshot);
        if self.commit(ticket, (*fresh).clone()).await {
            return Ok(fresh);
        }
        Ok(self.latest().await.unwrap_or(fresh))
    }

    pub async fn latest(&self) -> Option<Arc<PriceSnapshot>> {
        self.current
            .lock()
            .await
            .as_ref()
            .map(|entry| entry.snapshot.clone())
    }

    pub async fn latest_entry(&self) -> Option<FeedEntry> {
        self.current.lock().await.clone()
    }
}
