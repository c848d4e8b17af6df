use crate::events::AppEvent;
use crate::sys::sampler::ShellCommand;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use socialfab::preview::PositionMode;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Settings {
    /// An empty string disables sampling, so `TWOTAP_SAMPLER=` can switch it off.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sampler: Option<ShellCommand>,
    #[serde(default)]
    pub position_mode: PositionMode,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_settings_path() -> Result<PathBuf, SettingsError> {
    let proj_dirs =
        ProjectDirs::from("org", "twotap", "twotap").ok_or(SettingsError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build(source: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let mut builder = config::Config::builder();
    if let Some(path) = source {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let s = builder
        .add_source(config::Environment::with_prefix("TWOTAP"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    build(Some(get_settings_path()?))
}

/// Falls back to defaults (still honoring the environment) when the file is
/// missing or broken.
pub fn load_or_default() -> Settings {
    match load_settings() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Using default settings: {}", e);
            build(None).unwrap_or_default()
        }
    }
}

/// Writes the commented default file unless one is already there. Returns the
/// path and whether anything was written.
pub fn write_default_settings() -> Result<(PathBuf, bool), SettingsError> {
    let path = get_settings_path()?;
    if path.is_file() {
        return Ok((path, false));
    }
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    fs_err::write(&path, DEFAULT_SETTINGS)?;
    Ok((path, true))
}

const DEFAULT_SETTINGS: &str = include_str!("default_settings.toml");

/// Whether a filesystem event created, changed or removed the settings file.
fn touches_settings(event: &notify::Event, file_name: &OsStr) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

fn watch_dir(
    dir: &Path,
    events: Sender<notify::Result<notify::Event>>,
) -> Result<RecommendedWatcher, SettingsError> {
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Watches the settings directory and posts one `SettingsReload` per burst of
/// changes to the settings file. Editors tend to emit several events per save.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let path = match get_settings_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Settings will not be reloaded: {}", e);
            return;
        }
    };
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(dir) {
        log::error!("Settings will not be reloaded: {}", e);
        return;
    }

    let (events_tx, events_rx) = async_channel::unbounded();
    // dropping the watcher stops the notifications
    let _watcher = match watch_dir(dir, events_tx) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Cannot watch {}: {}", dir.display(), e);
            return;
        }
    };
    log::debug!("Watching {} for settings changes", path.display());

    while let Ok(res) = events_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Settings watch error: {}", e);
                continue;
            }
        };
        if !touches_settings(&event, file_name) {
            continue;
        }
        while events_rx.try_recv().is_ok() {}
        if tx.send(AppEvent::SettingsReload).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserialization() {
        let json = r#"{ "sampler": "hyprpicker --no-fancy", "position_mode": "Relative" }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.position_mode, PositionMode::Relative);
        assert_eq!(
            settings.sampler.as_ref().map(|s| s.as_str()),
            Some("hyprpicker --no-fancy")
        );
    }

    #[test]
    fn test_settings_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.sampler.is_none());
        assert_eq!(settings.position_mode, PositionMode::Fixed);
    }

    #[test]
    fn test_empty_sampler_disables_sampling() {
        let settings: Settings = serde_json::from_str(r#"{ "sampler": "" }"#).unwrap();
        assert!(settings.sampler.is_none());
    }

    #[test]
    fn test_only_settings_file_events_trigger_reload() {
        let name = OsStr::new("config.toml");
        let modify = |path: &str| {
            notify::Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
                .add_path(PathBuf::from(path))
        };

        assert!(touches_settings(&modify("/home/u/.config/twotap/config.toml"), name));
        assert!(!touches_settings(&modify("/home/u/.config/twotap/config.toml.swp"), name));
        assert!(!touches_settings(&modify("/home/u/.config/twotap/other.toml"), name));

        let access = notify::Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/home/u/.config/twotap/config.toml"));
        assert!(!touches_settings(&access, name));
    }

    #[test]
    fn test_default_settings_file_parses() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_SETTINGS,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings, Settings::default());
    }
}
