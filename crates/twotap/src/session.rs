use crate::command::{Command, HELP};
use crate::events::AppEvent;
use crate::settings::{self, Settings};
use crate::sys::clipboard::{self, ClipboardSink};
use crate::sys::sampler::{self, ColorSampler, SampleError};
use async_channel::{Receiver, Sender};
use socialfab::codegen::synthesize;
use socialfab::model::{ColorSelector, CustomColorsPatch, FieldUpdate, HexColor, WizardConfig};
use socialfab::preview::{PositionMode, PreviewFrame, color_name};
use socialfab::store::{ConfigStore, Snapshot, StoreError};
use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive editing session. Owns the store; everything else reads
/// snapshots handed out by it.
pub struct Session {
    store: ConfigStore,
    sampler: Option<Arc<dyn ColorSampler>>,
    clipboard: Arc<dyn ClipboardSink>,
    mode: Rc<Cell<PositionMode>>,
    frame: Rc<RefCell<PreviewFrame>>,
    code: Rc<RefCell<String>>,
    handle: Handle,
    tx: Sender<AppEvent>,
}

impl Session {
    pub fn new(
        settings: Settings,
        clipboard: Arc<dyn ClipboardSink>,
        handle: Handle,
        tx: Sender<AppEvent>,
    ) -> Self {
        let mut store = ConfigStore::default();
        let snapshot = store.snapshot();
        let mode = Rc::new(Cell::new(settings.position_mode));
        let frame = Rc::new(RefCell::new(PreviewFrame::build(&snapshot, mode.get())));
        let code = Rc::new(RefCell::new(synthesize(&snapshot)));

        {
            let frame = frame.clone();
            let mode = mode.clone();
            store.subscribe(move |s| *frame.borrow_mut() = PreviewFrame::build(s, mode.get()));
        }
        {
            let code = code.clone();
            store.subscribe(move |s| *code.borrow_mut() = synthesize(s));
        }

        Self {
            store,
            sampler: sampler::from_settings(settings.sampler.as_ref()),
            clipboard,
            mode,
            frame,
            code,
            handle,
            tx,
        }
    }

    pub fn with_sampler(mut self, sampler: Option<Arc<dyn ColorSampler>>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn frame(&self) -> PreviewFrame {
        self.frame.borrow().clone()
    }

    pub fn code(&self) -> String {
        self.code.borrow().clone()
    }

    pub fn run(mut self, rx: Receiver<AppEvent>) {
        println!("twotap: editing a fresh widget, type 'help' for commands");
        while let Ok(event) = rx.recv_blocking() {
            if self.handle_event(event) == Flow::Quit {
                break;
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Command(line) => return self.handle_line(&line),
            AppEvent::InputClosed => return Flow::Quit,
            AppEvent::ColorSampled(color) => self.apply_sample(color),
            AppEvent::SampleFailed(e) => {
                log::info!("Color sample ended without a color: {}", e);
                println!("{e}");
            }
            AppEvent::Copied => println!("Copied"),
            AppEvent::CopyFailed(reason) => {
                log::warn!("Clipboard write failed: {}", reason);
                println!("{reason}");
            }
            AppEvent::SettingsReload => self.reload_settings(),
        }
        Flow::Continue
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                println!("{e}");
                Flow::Continue
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        let result: Result<(), StoreError> = match command {
            Command::Set { key, value } => self.store.set_field_raw(&key, &value).map(|_| ()),
            Command::Add => {
                self.store.add_social_link();
                Ok(())
            }
            Command::Link {
                index,
                field,
                value,
            } => self
                .store
                .update_social_link_raw(index, &field, &value)
                .map(|_| ()),
            Command::Remove(index) => self.store.remove_social_link(index).map(|_| ()),
            Command::Show => {
                print!("{}", describe(&self.snapshot()));
                Ok(())
            }
            Command::Preview => {
                print!("{}", self.frame.borrow());
                Ok(())
            }
            Command::Export => {
                print!("{}", self.code.borrow());
                Ok(())
            }
            Command::Copy => {
                clipboard::spawn_copy(
                    &self.handle,
                    self.clipboard.clone(),
                    self.code(),
                    self.tx.clone(),
                );
                Ok(())
            }
            Command::Sample => {
                self.request_sample();
                Ok(())
            }
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Quit => return Flow::Quit,
        };

        if let Err(e) = result {
            log::debug!("Rejected mutation: {}", e);
            println!("error: {e}");
        }
        Flow::Continue
    }

    fn request_sample(&self) {
        match &self.sampler {
            Some(sampler) => {
                sampler::spawn_sample(&self.handle, sampler.clone(), self.tx.clone());
            }
            None => println!("{}", SampleError::Unavailable),
        }
    }

    /// A sampled color becomes the custom primary and selects custom colors.
    fn apply_sample(&mut self, color: HexColor) {
        println!("Sampled {color}");
        self.store.set_field(FieldUpdate::Color(ColorSelector::Custom));
        self.store
            .set_field(FieldUpdate::CustomColors(CustomColorsPatch::primary(color)));
    }

    fn reload_settings(&mut self) {
        match settings::load_settings() {
            Ok(new_settings) => self.apply_settings(new_settings),
            Err(e) => log::error!("Failed to reload settings: {}", e),
        }
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.sampler = sampler::from_settings(settings.sampler.as_ref());
        self.mode.set(settings.position_mode);
        *self.frame.borrow_mut() = PreviewFrame::build(&self.snapshot(), settings.position_mode);
        log::info!("Settings reloaded");
    }
}

/// Human-readable listing of every field.
pub fn describe(config: &WizardConfig) -> String {
    let mut out = String::new();
    let custom = &config.custom_colors;
    let custom_state = if config.color.is_custom() {
        "active"
    } else {
        "inactive"
    };

    let _ = writeln!(out, "size            {}", config.size);
    let _ = writeln!(out, "position        {}", config.position);
    let _ = writeln!(out, "bottomOffset    {}px", config.bottom_offset);
    let _ = writeln!(out, "color           {}", color_name(config.color));
    let _ = writeln!(
        out,
        "customColors    {} / {} / {} ({custom_state})",
        custom.primary, custom.secondary, custom.hover
    );
    let _ = writeln!(out, "showLabels      {}", config.show_labels);
    let _ = writeln!(out, "animationStyle  {}", config.animation_style);
    let _ = writeln!(out, "toggleIcon      {}", config.toggle_icon);
    let _ = writeln!(out, "brandColors     {}", config.brand_colors);
    if let Some(url) = &config.preview_url {
        let _ = writeln!(out, "previewUrl      {url}");
    }
    let _ = writeln!(out, "socialLinks     {}", config.social_links.len());
    for (i, link) in config.social_links.iter().enumerate() {
        let _ = writeln!(out, "  #{i} {} {} \"{}\"", link.platform, link.url, link.label);
    }
    out
}
