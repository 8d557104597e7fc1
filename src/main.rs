use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use stockroom::core::config::{self, StockroomConfig};
use stockroom::tui;

#[derive(Parser)]
#[command(name = "stockroom", version, about = "In-memory inventory manager for the terminal")]
struct Args {
    /// Go straight to the main menu
    #[arg(long)]
    skip_intro: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config: defaults → ~/.stockroom/config.toml → CLI flags
    let loaded = config::load_config();
    let resolved = match &loaded {
        Ok(file_config) => config::resolve(file_config, args.skip_intro),
        Err(_) => config::resolve(&StockroomConfig::default(), args.skip_intro),
    };

    // File logger only; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let logger = config::open_log_file(&resolved.log_file)
        .map_err(|e| e.to_string())
        .and_then(|log_file| {
            WriteLogger::init(resolved.log_level, log_config, log_file).map_err(|e| e.to_string())
        });
    // Last chance to say so before the TUI takes over the terminal
    if let Err(e) = logger {
        eprintln!(
            "stockroom: logging disabled, cannot write {}: {}",
            resolved.log_file.display(),
            e
        );
    }

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file, using defaults: {}", e);
    }
    log::info!(
        "Stockroom {} starting up (intro: {})",
        env!("CARGO_PKG_VERSION"),
        resolved.show_intro
    );

    tui::run(resolved)
}
