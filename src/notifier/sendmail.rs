use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::info;

use crate::app::{CedarError, MailConfig, Result};
use crate::domain::Entry;
use crate::notifier::Notifier;

const SENDMAIL: &str = "/usr/sbin/sendmail";

pub struct SendmailNotifier {
    sendmail: PathBuf,
    mail: MailConfig,
}

impl SendmailNotifier {
    pub fn new(mail: MailConfig) -> Self {
        Self {
            sendmail: PathBuf::from(SENDMAIL),
            mail,
        }
    }

    /// Use a different mail-transfer binary in place of the system sendmail.
    pub fn with_sendmail(sendmail: impl Into<PathBuf>, mail: MailConfig) -> Self {
        Self {
            sendmail: sendmail.into(),
            mail,
        }
    }

    fn render(&self, entry: &Entry, section: &str) -> String {
        format!(
            "To: {}\n\
             From: {}\n\
             Subject: FSF India - {} - {}\n\
             \n\
             FSF India published \"{}\":\n\
             \n   {}\n",
            self.mail.to,
            self.mail.from,
            capitalize(section),
            entry.title,
            entry.title,
            entry.link
        )
    }
}

#[async_trait]
impl Notifier for SendmailNotifier {
    async fn notify(&self, entry: &Entry, section: &str) -> Result<()> {
        let message = self.render(entry, section);

        let mut child = Command::new(&self.sendmail)
            .arg("-t")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                CedarError::Dispatch(format!("Failed to spawn {}: {e}", self.sendmail.display()))
            })?;

        // Stdin is piped above, so take() always yields it.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CedarError::Dispatch("Failed to open sendmail stdin".into()))?;
        stdin
            .write_all(message.as_bytes())
            .await
            .map_err(|e| CedarError::Dispatch(format!("Failed to write message: {e}")))?;
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| CedarError::Dispatch(format!("Failed to wait for sendmail: {e}")))?;

        if !status.success() {
            return Err(CedarError::Dispatch(format!(
                "sendmail exited with {status}"
            )));
        }

        info!("Sent {} to {}", entry.id, self.mail.to);
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
