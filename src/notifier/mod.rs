pub mod sendmail;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Entry;

#[async_trait]
pub trait Notifier {
    /// Dispatch one notification for `entry`. Success means the local
    /// mail-transfer mechanism accepted the message, not end-to-end delivery.
    async fn notify(&self, entry: &Entry, section: &str) -> Result<()>;
}
