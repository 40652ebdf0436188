//! # Cedar
//!
//! A one-shot feed announcer: fetch a remote Atom/RSS feed, email each entry
//! that has not been announced before, and remember the announced ids so the
//! next run stays quiet about them. Periodicity belongs to an external
//! scheduler (cron, systemd timer); one invocation is one pass.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Decoder → diff against JsonStore → Notifier → persist JsonStore
//! ```
//!
//! - [`fetcher`]: HTTP client for the raw feed document
//! - [`decoder`]: feed-rs based markup-to-entries decoding
//! - [`store`]: per-section JSON cache of announced entry ids
//! - [`notifier`]: sendmail-backed email dispatch
//! - [`pipeline`]: the fetch/diff/notify/persist orchestration

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together store, fetcher, decoder,
/// and notifier.
pub mod app;

/// Command-line interface using clap.
///
/// One flag matters: `-t/--to`, the recipient address. Without it the
/// program prints usage and exits without doing anything.
pub mod cli;

/// Feed decoding.
///
/// Converts RSS and Atom documents into [`Entry`](domain::Entry) values,
/// preserving document order.
pub mod decoder;

/// Core domain model: [`Entry`](domain::Entry), an id/title/link triple.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for feed fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based
///   implementation
pub mod fetcher;

/// Email notification.
///
/// - [`Notifier`](notifier::Notifier): async trait for dispatching one
///   notification
/// - [`SendmailNotifier`](notifier::sendmail::SendmailNotifier): pipes an
///   RFC-822 message to the local sendmail binary
pub mod notifier;

/// The announcement pipeline: fetch, decode, diff, notify, persist.
pub mod pipeline;

/// Announcement cache persistence.
///
/// - [`SeenIds`](store::SeenIds): append-only ordered id record
/// - [`JsonStore`](store::JsonStore): one `<section>.json` file per section
///   under `~/.cedar`
pub mod store;
