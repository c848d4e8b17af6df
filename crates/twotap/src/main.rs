use anyhow::Context;
use clap::{Parser, Subcommand};
use socialfab::codegen::synthesize;
use socialfab::preview::{PositionMode, PreviewFrame};
use socialfab::store::ConfigStore;
use std::path::PathBuf;
use std::sync::Arc;
use twotap::session::Session;
use twotap::settings;
use twotap::sys::clipboard::{ClipboardSink, SystemClipboard};
use twotap::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "twotap", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Edit a widget interactively (default).
    Edit,
    /// Print the embeddable code for the default widget plus overrides.
    Export {
        /// Field override, e.g. `--set size=lg` (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,

        /// Write the code to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Also copy the code to the clipboard
        #[arg(short = 'c', long)]
        copy: bool,
    },
    /// Print where each link button would be placed.
    Preview {
        /// Field override, e.g. `--set animation=fan` (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,

        /// Pin to the container rather than the viewport
        #[arg(short = 'r', long)]
        relative: bool,
    },
    /// Write a commented settings file if none exists.
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Edit) {
        Commands::Edit => edit(),
        Commands::Export {
            overrides,
            output,
            copy,
        } => export(&overrides, output, copy),
        Commands::Preview {
            overrides,
            relative,
        } => preview(&overrides, relative),
        Commands::InitConfig => {
            let (path, written) = settings::write_default_settings()?;
            if written {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists, left untouched", path.display());
            }
            Ok(())
        }
    }
}

fn edit() -> anyhow::Result<()> {
    let settings = settings::load_or_default();
    let (tx, rx) = async_channel::bounded(32);

    let rt = runtime::start_background_services(tx.clone())
        .context("Failed to start background services")?;

    let session = Session::new(settings, Arc::new(SystemClipboard), rt.handle().clone(), tx);
    session.run(rx);

    // the stdin reader may still be parked on a read
    rt.shutdown_background();
    Ok(())
}

fn store_with(overrides: &[String]) -> anyhow::Result<ConfigStore> {
    let mut store = ConfigStore::default();
    for item in overrides {
        let (key, value) = item
            .split_once('=')
            .with_context(|| format!("Override '{}' is not FIELD=VALUE", item))?;
        store
            .set_field_raw(key, value)
            .with_context(|| format!("Invalid override '{}'", item))?;
    }
    Ok(store)
}

fn export(overrides: &[String], output: Option<PathBuf>, copy: bool) -> anyhow::Result<()> {
    let code = synthesize(&store_with(overrides)?.snapshot());

    match output {
        Some(path) => {
            fs_err::write(&path, &code)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{code}"),
    }

    if copy {
        SystemClipboard.write_text(&code)?;
        eprintln!("Copied");
    }
    Ok(())
}

fn preview(overrides: &[String], relative: bool) -> anyhow::Result<()> {
    let mode = if relative {
        PositionMode::Relative
    } else {
        settings::load_or_default().position_mode
    };
    let frame = PreviewFrame::build(&store_with(overrides)?.snapshot(), mode);
    print!("{frame}");
    Ok(())
}
