use tracing::{debug, warn};
use url::Url;

use crate::app::{AppContext, CedarError, Result};

/// Per-run accounting for the completion log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries notified and recorded this run.
    pub sent: usize,
    /// Entries already present in the cache.
    pub skipped: usize,
    /// Entries whose dispatch failed; retried on the next run.
    pub failed: usize,
}

/// Announce the new entries of the feed at `feed_url` for `section`.
///
/// Fetch, decode, and cache-load errors abort the run before any
/// notification. Dispatch failures are per-entry: the failure is logged, the
/// entry's id is not recorded, and the run continues, so one bad entry cannot
/// block the rest. The cache is persisted once after the pass; an empty feed
/// is a no-op with no cache write.
pub async fn run(ctx: &AppContext, section: &str, feed_url: &str) -> Result<RunSummary> {
    let url = Url::parse(feed_url)
        .map_err(|e| CedarError::Config(format!("Invalid feed URL {feed_url}: {e}")))?;

    let body = ctx.fetcher.fetch(url.as_str()).await?;
    let entries = ctx.decoder.decode(&body)?;
    let mut record = ctx.store.load(section)?;

    if entries.is_empty() {
        debug!("Feed has no entries, nothing to do");
        return Ok(RunSummary::default());
    }

    let mut summary = RunSummary::default();
    for entry in &entries {
        if record.contains(&entry.id) {
            summary.skipped += 1;
            continue;
        }

        match ctx.notifier.notify(entry, section).await {
            Ok(()) => {
                record.append(entry.id.clone());
                summary.sent += 1;
            }
            Err(e) => {
                warn!("Dispatch failed for {}: {e}", entry.id);
                summary.failed += 1;
            }
        }
    }

    ctx.store.persist(&record, section)?;
    Ok(summary)
}
