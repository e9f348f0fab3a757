use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cardgrid::card::{self, SAMPLE_TEXTS};
use cardgrid::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser)]
#[command(name = "cardgrid", about = "Render texts as tiled index cards")]
struct Args {
    /// Card texts, one card each. Renders a sample card when empty.
    texts: Vec<String>,

    /// Read card texts from a JSON array of strings ("-" for stdin)
    #[arg(short, long, conflicts_with = "texts")]
    input: Option<PathBuf>,

    /// Characters between the left and right card borders
    #[arg(long)]
    width: Option<usize>,

    /// Minimum card height in rows, borders included
    #[arg(long)]
    min_height: Option<usize>,

    /// Cards placed side by side before wrapping
    #[arg(long)]
    per_row: Option<usize>,

    /// Config file to use instead of ~/.cardgrid/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a commented-out default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging(&args);

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::config_path)
            .context("could not determine home directory")?;
        config::write_default_config(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let file_config = config::load_config(args.config.as_deref())?;
    let layout = config::resolve(
        &file_config,
        &CliOverrides {
            interior_width: args.width,
            min_height: args.min_height,
            cards_per_row: args.per_row,
        },
    );
    log::debug!("Resolved layout: {:?}", layout);

    let rendered = match &args.input {
        Some(path) => {
            let value = read_json(path)?;
            card::render_json(&value, &layout)
        }
        None if args.texts.is_empty() => card::render_cards(SAMPLE_TEXTS, &layout),
        None => card::render_cards(args.texts.as_slice(), &layout),
    };

    match rendered {
        Ok(grid) => {
            print!("{grid}");
            Ok(())
        }
        Err(e) => {
            log::error!("Rendering failed: {e}");
            Err(e.into())
        }
    }
}

fn init_logging(args: &Args) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(path) = &args.log_file {
        match open_log_file(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
                return;
            }
            Err(reason) => eprintln!("warning: {reason}"),
        }
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Never);
}

/// Create the requested log file, or say why logging falls back to stderr.
fn open_log_file(path: &Path) -> Result<File, String> {
    File::create(path).map_err(|e| {
        format!(
            "cannot create log file {}: {e}; logging to stderr",
            path.display()
        )
    })
}

/// Parse the JSON document at `path`, or stdin for `-`.
fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read stdin")?;
        raw
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardgrid.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("cardgrid.log");

        let reason = open_log_file(&path).unwrap_err();
        assert!(reason.contains("missing-dir"));
        assert!(reason.ends_with("logging to stderr"));
    }

    #[test]
    fn read_json_parses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"["Hi", "there"]"#).unwrap();

        let value = read_json(&path).unwrap();
        assert_eq!(value, serde_json::json!(["Hi", "there"]));
    }
}
