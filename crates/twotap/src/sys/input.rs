use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Forwards each non-empty stdin line to the session as a command.
pub async fn run_reader(tx: Sender<AppEvent>) {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if tx.send(AppEvent::Command(line.to_string())).await.is_err() {
                    return;
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    let _ = tx.send(AppEvent::InputClosed).await;
}
