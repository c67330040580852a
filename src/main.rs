// SPDX-License-Identifier: MPL-2.0
use iced_transport::app::{self, Flags};
use iced_transport::domain::video::{MediaSource, QualityVariant};
use iced_transport::video_player::SimulatedMedia;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_DURATION_SECS: f64 = 600.0;

const HELP: &str = "\
Usage: iced_transport [OPTIONS] URL

Options:
  --config DIR            Configuration directory (overrides ICED_TRANSPORT_CONFIG_DIR)
  --duration SECS         Duration reported by the simulated engine [default: 600]
  --live                  Simulate a live stream (no finite duration)
  --quality LABEL=URL     Add a quality variant (repeatable)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}

fn parse_flags() -> Result<Option<Flags>, String> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir: Option<PathBuf> = args
        .opt_value_from_str("--config")
        .map_err(|e| e.to_string())?;
    let live = args.contains("--live");
    let duration: Option<f64> = args
        .opt_value_from_str("--duration")
        .map_err(|e| e.to_string())?;

    let mut qualities = Vec::new();
    while let Some(pair) = args
        .opt_value_from_str::<_, String>("--quality")
        .map_err(|e| e.to_string())?
    {
        let variant = QualityVariant::parse_pair(&pair)
            .ok_or_else(|| format!("invalid quality '{pair}', expected LABEL=URL"))?;
        qualities.push(variant);
    }

    let url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
        .ok_or_else(|| "missing media URL".to_string())?;

    let media = if live {
        SimulatedMedia::live()
    } else {
        SimulatedMedia::vod(duration.unwrap_or(DEFAULT_DURATION_SECS))
    };

    Ok(Some(Flags {
        config_dir,
        source: MediaSource::with_qualities(url, qualities),
        media,
    }))
}
