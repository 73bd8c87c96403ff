//! resume-tui: Terminal resume builder
//!
//! A keyboard-driven TUI that mirrors form input into a live resume
//! preview, keeps every draft in a local store and prints a styled
//! HTML rendering.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::panic;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_tui::error::StoreError;
use resume_tui::services::{platform, FileStore, MemoryStore, Store};
use resume_tui::{App, AppConfig};

/// Terminal resume builder with live preview and print-ready export
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Keep everything in memory; nothing is written to disk except exports
    #[arg(long, default_value_t = false)]
    ephemeral: bool,
    /// Overrides `storage.data_dir`
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Fold the flags into the loaded configuration.
    ///
    /// An ephemeral session without an explicit data dir keeps its exports
    /// under the temp dir.
    fn apply(self, config: &mut AppConfig) {
        if let Some(dir) = self.data_dir {
            config.storage.data_dir = Some(dir);
        } else if self.ephemeral {
            config.storage.data_dir = Some(std::env::temp_dir().join("resume-tui"));
        }
    }
}

/// Raw mode plus the alternate screen
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Undoes [`setup_terminal`]
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Leaves raw mode before the default hook prints the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn open_store(config: &AppConfig, ephemeral: bool) -> Result<Box<dyn Store>> {
    if ephemeral {
        tracing::info!("Ephemeral session, nothing will be stored");
        return Ok(Box::new(MemoryStore::new()));
    }

    let data_dir = config.data_dir().ok_or(StoreError::DataDirUnavailable)?;
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open store in {}", data_dir.display()))?;
    tracing::info!("Using store {:?}", store.path());
    Ok(Box::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = CliArgs::parse();
    let ephemeral = cli.ephemeral;

    let working_dir = std::env::current_dir().ok();
    let mut config = AppConfig::load(working_dir.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Ignoring configuration: {}", e);
        AppConfig::load_defaults()
    });
    cli.apply(&mut config);

    let store = open_store(&config, ephemeral)?;
    let system_theme = platform::system_theme(config.appearance.system_theme);

    install_panic_hook();

    tracing::info!("Starting resume-tui");

    let mut terminal = setup_terminal()?;

    let result = async {
        let mut app = App::new(config, store, system_theme)?;

        tokio::select! {
            res = app.run(&mut terminal) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down gracefully");
                Ok(())
            }
        }
    }
    .await;

    // Runs even when the app failed
    restore_terminal(&mut terminal)?;

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = CliArgs::try_parse_from(["resume-tui"]).unwrap();
        assert_eq!(cli, CliArgs::default());

        let cli =
            CliArgs::try_parse_from(["resume-tui", "--ephemeral", "--data-dir", "/tmp/r"]).unwrap();
        assert!(cli.ephemeral);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/r")));
    }

    #[test]
    fn test_cli_rejects_unknown_and_missing_values() {
        assert!(CliArgs::try_parse_from(["resume-tui", "--verbose"]).is_err());
        assert!(CliArgs::try_parse_from(["resume-tui", "--data-dir"]).is_err());
    }

    #[test]
    fn test_ephemeral_exports_stay_in_temp_dir() {
        let mut config = AppConfig::load_defaults();
        CliArgs {
            ephemeral: true,
            data_dir: None,
        }
        .apply(&mut config);

        let export_dir = config.export_dir().unwrap();
        assert!(export_dir.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let mut config = AppConfig::load_defaults();
        CliArgs {
            ephemeral: true,
            data_dir: Some(PathBuf::from("/srv/resume")),
        }
        .apply(&mut config);

        assert_eq!(config.data_dir(), Some(PathBuf::from("/srv/resume")));
    }
}
