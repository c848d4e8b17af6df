//! Ambient color sampling through an external picker command.
//!
//! The session holds an `Option` of a sampler; `None` means the capability is
//! simply not offered.

use crate::events::AppEvent;
use async_channel::Sender;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use socialfab::model::HexColor;
use std::convert::Infallible;
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ShellCommand(String);

socialfab::impl_string_newtype!(ShellCommand);

impl FromStr for ShellCommand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("color sampling is not available")]
    Unavailable,
    #[error("color sampling was cancelled")]
    Cancelled,
    #[error("failed to launch color sampler: {0}")]
    Launch(String),
    #[error("sampler returned something that is not a color: '{0}'")]
    Unreadable(String),
}

pub trait ColorSampler: Send + Sync {
    /// Blocks until the user has picked a color or backed out.
    fn sample(&self) -> Result<HexColor, SampleError>;
}

#[derive(Debug, Clone)]
pub struct CommandSampler {
    command: ShellCommand,
}

impl CommandSampler {
    pub fn new(command: ShellCommand) -> Self {
        Self { command }
    }
}

/// Takes the first token of the picker's output and normalizes it to `#RRGGBB`.
pub fn parse_sample(output: &str) -> Result<HexColor, SampleError> {
    let token = output
        .split_whitespace()
        .next()
        .ok_or(SampleError::Cancelled)?;

    HexColor::new(token)
        .to_srgb()
        .map(HexColor::from_srgb)
        .ok_or_else(|| SampleError::Unreadable(token.to_string()))
}

impl ColorSampler for CommandSampler {
    fn sample(&self) -> Result<HexColor, SampleError> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(self.command.as_str())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| SampleError::Launch(e.to_string()))?;

        if !output.status.success() {
            return Err(SampleError::Cancelled);
        }

        parse_sample(&String::from_utf8_lossy(&output.stdout))
    }
}

pub fn from_settings(command: Option<&ShellCommand>) -> Option<Arc<dyn ColorSampler>> {
    command.map(|c| Arc::new(CommandSampler::new(c.clone())) as Arc<dyn ColorSampler>)
}

/// Runs one sample off the session thread and reports back with exactly one event.
pub fn spawn_sample(handle: &Handle, sampler: Arc<dyn ColorSampler>, tx: Sender<AppEvent>) {
    handle.spawn(async move {
        let event = match tokio::task::spawn_blocking(move || sampler.sample()).await {
            Ok(Ok(color)) => AppEvent::ColorSampled(color),
            Ok(Err(e)) => AppEvent::SampleFailed(e),
            Err(e) => AppEvent::SampleFailed(SampleError::Launch(e.to_string())),
        };
        let _ = tx.send(event).await;
    });
}
