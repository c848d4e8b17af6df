//! Copying the synthesized artifact to the system clipboard.

use crate::events::AppEvent;
use async_channel::Sender;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to copy to clipboard: {0}")]
    Write(#[from] arboard::Error),
}

pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
            .map_err(ClipboardError::from)
    }
}

/// Copies off the session thread; the outcome comes back as one event and
/// never touches the configuration.
pub fn spawn_copy(
    handle: &Handle,
    sink: Arc<dyn ClipboardSink>,
    text: String,
    tx: Sender<AppEvent>,
) {
    handle.spawn(async move {
        let event = match tokio::task::spawn_blocking(move || sink.write_text(&text)).await {
            Ok(Ok(())) => AppEvent::Copied,
            Ok(Err(e)) => AppEvent::CopyFailed(e.to_string()),
            Err(e) => AppEvent::CopyFailed(e.to_string()),
        };
        let _ = tx.send(event).await;
    });
}
