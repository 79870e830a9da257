//! Debounced search feed.
//!
//! Filter edits are debounced with a 500ms quiescence window so that rapid
//! typing issues one remote query, for the latest text only. A newer filter
//! supersedes any in-flight fetch (last-filter-wins): the superseded task is
//! aborted, so a stale result can never arrive after a fresher one.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, sleep};

use crate::paging::{SummaryPage, load};
use crate::source::{CatalogSource, SourceError};

/// Quiescence window after the last filter edit before a query is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Forwards only filters that stayed unchanged for [`DEBOUNCE`].
///
/// Intermediate edits inside one window are collapsed into the latest value.
/// When `input` closes with an edit still pending, that edit is flushed before
/// returning.
pub async fn debounce_filters(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
) {
    let Some(mut latest) = input.recv().await else {
        return;
    };
    loop {
        let timer = sleep(DEBOUNCE);
        tokio::pin!(timer);
        loop {
            tokio::select! {
                edit = input.recv() => match edit {
                    Some(filter) => {
                        latest = filter;
                        timer.as_mut().reset(Instant::now() + DEBOUNCE);
                    }
                    None => {
                        let _ = output.send(latest);
                        return;
                    }
                },
                _ = &mut timer => break,
            }
        }
        if output.send(latest).is_err() {
            return;
        }
        match input.recv().await {
            Some(filter) => latest = filter,
            None => return,
        }
    }
}

/// Outcome of one debounced query.
#[derive(Debug)]
pub struct SearchResult {
    /// The filter text the query was issued for.
    pub filter: String,
    /// First page of results, or the recoverable load error.
    pub page: Result<SummaryPage, SourceError>,
}

/// A running search pipeline: filter edits in, debounced first pages out.
pub struct SearchFeed {
    filters: mpsc::UnboundedSender<String>,
    results: mpsc::UnboundedReceiver<SearchResult>,
    debouncer: JoinHandle<()>,
    driver: JoinHandle<()>,
}

impl SearchFeed {
    /// Spawns the debouncer and query driver on the current runtime.
    pub fn spawn(source: Arc<dyn CatalogSource>, page_size: u32) -> Self {
        let (filter_tx, filter_rx) = mpsc::unbounded_channel();
        let (debounced_tx, mut debounced_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        let debouncer = tokio::spawn(debounce_filters(filter_rx, debounced_tx));

        let driver = tokio::spawn(async move {
            let mut in_flight: Option<JoinHandle<()>> = None;
            while let Some(filter) = debounced_rx.recv().await {
                // A newer filter invalidates whatever the older one would return.
                if let Some(handle) = in_flight.take() {
                    handle.abort();
                }
                let source = Arc::clone(&source);
                let result_tx = result_tx.clone();
                in_flight = Some(tokio::spawn(async move {
                    tracing::debug!(filter, "issuing debounced query");
                    let page = load(source.as_ref(), 0, page_size, &filter).await;
                    let _ = result_tx.send(SearchResult { filter, page });
                }));
            }
        });

        Self {
            filters: filter_tx,
            results: result_rx,
            debouncer,
            driver,
        }
    }

    /// Records a filter edit; the query fires once typing goes quiet.
    pub fn set_filter(&self, filter: impl Into<String>) {
        let _ = self.filters.send(filter.into());
    }

    /// Waits for the next query outcome.
    pub async fn next_result(&mut self) -> Option<SearchResult> {
        self.results.recv().await
    }
}

impl Drop for SearchFeed {
    fn drop(&mut self) {
        self.debouncer.abort();
        self.driver.abort();
    }
}
