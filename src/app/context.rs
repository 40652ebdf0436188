use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{CedarError, Result};
use crate::decoder::Decoder;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::notifier::sendmail::SendmailNotifier;
use crate::notifier::Notifier;
use crate::store::JsonStore;

/// Mail addressing carried explicitly instead of as process-global state.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub to: String,
    pub from: String,
}

pub struct AppContext {
    pub store: JsonStore,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub decoder: Decoder,
    pub notifier: Arc<dyn Notifier + Send + Sync>,
}

impl AppContext {
    pub fn new(cache_dir: Option<PathBuf>, mail: MailConfig) -> Result<Self> {
        let cache_dir = match cache_dir {
            Some(d) => d,
            None => Self::default_cache_dir()?,
        };

        Ok(Self {
            store: JsonStore::new(cache_dir),
            fetcher: Arc::new(HttpFetcher::new()),
            decoder: Decoder::new(),
            notifier: Arc::new(SendmailNotifier::new(mail)),
        })
    }

    fn default_cache_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CedarError::Config("Could not find home directory".into()))?;
        Ok(home.join(".cedar"))
    }
}
