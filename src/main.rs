use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use huewheel::{
    AppConfig, Channel, ConfigError, ExportError, LogLevel, Message, PickerApp, export_all,
};

// CLI arg definition
#[derive(Parser, Debug)]
#[command(version, about = "HSV color picker and harmonic palette generator")]
struct Args {
    /// Configuration file (defaults to the per-user config path)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start color as six hex digits, e.g. 1A2B3C
    #[arg(long, value_name = "RRGGBB")]
    hex: Option<String>,

    #[arg(long, value_name = "0-360",
        value_parser = clap::value_parser!(i32).range(0..=360))]
    hue: Option<i32>,

    #[arg(short, long, value_name = "0-255",
        value_parser = clap::value_parser!(i32).range(0..=255))]
    saturation: Option<i32>,

    #[arg(short, long, value_name = "0-255",
        value_parser = clap::value_parser!(i32).range(0..=255))]
    value: Option<i32>,

    /// Number of palette hues
    #[arg(short, long, value_name = "2-360",
        value_parser = clap::value_parser!(u16).range(2..=360))]
    divisions: Option<u16>,

    /// Traverse palette hues clockwise
    #[arg(short, long)]
    reverse: bool,

    /// Write the rasters and palette; without a folder, uses the configured one
    #[arg(short, long, value_name = "DIR")]
    export: Option<Option<PathBuf>>,

    /// Error, warn, info, debug or trace. RUST_LOG overrides it.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Store the resulting settings back into the configuration file
    #[arg(long)]
    save_config: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging isn't up yet, so load problems are reported once it is
    let loaded = match &args.config {
        Some(path) => AppConfig::load(path).map(Some),
        None => Ok(AppConfig::load_from_default_path()),
    };

    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.as_ref())
        .map(|config| config.preferences.log_level)
        .unwrap_or_default();
    let level = args.log_level.unwrap_or(config_level);
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();
    log::debug!("Log level {}", level.name());

    let config = match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, mut config: AppConfig) -> Result<(), CliError> {
    if let Some(hex) = &args.hex {
        config.preferences.initial_color = hex.clone();
    }
    if let Some(divisions) = args.divisions {
        config.preferences.division_count = usize::from(divisions);
    }
    if args.reverse {
        config.preferences.reverse = true;
    }
    if let Some(level) = args.log_level {
        config.preferences.log_level = level;
    }

    let mut app = PickerApp::from_preferences(&config.preferences)?;

    let edits = [
        (Channel::Hue, args.hue),
        (Channel::Saturation, args.saturation),
        (Channel::Value, args.value),
    ];
    for (channel, position) in edits {
        if let Some(position) = position {
            app.update(Message::slider(channel, position));
        }
    }

    print_summary(&app);

    if let Some(dir) = &args.export {
        let dir = dir
            .clone()
            .or_else(|| {
                let folder = &config.preferences.export_folder;
                (!folder.is_empty()).then(|| PathBuf::from(folder))
            })
            .unwrap_or_else(|| PathBuf::from("."));
        let files = export_all(&app, &dir)?;
        println!();
        println!("Wrote {}", files.wheel.display());
        println!("Wrote {}", files.plane.display());
        println!("Wrote {}", files.palette.display());
    }

    if args.save_config {
        config.preferences.initial_color = app.hex_input().to_ascii_uppercase();
        match &args.config {
            Some(path) => config.save(path)?,
            None => config.save_to_default_path()?,
        }
    }

    Ok(())
}

fn print_summary(app: &PickerApp) {
    let channels: Vec<String> = Channel::ALL
        .iter()
        .map(|channel| format!("{}={}", channel.label(), app.slider_position(*channel)))
        .collect();
    println!("Color  #{}  {}", app.hex_input().to_ascii_uppercase(), channels.join(" "));
    println!();
    for (i, swatch) in app.swatches().iter().enumerate() {
        println!("{:3}  {}  {}", i, swatch.hex, swatch.decimal_columns());
    }
}
