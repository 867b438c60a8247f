// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::ui::theming::ThemeMode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toasts - toast notification demo

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  -h, --help                  Print this help
      --config-dir <DIR>      Directory holding settings.toml
      --theme <MODE>          light, dark or system

ENVIRONMENT:
  ICED_TOASTS_CONFIG_DIR      Config directory when --config-dir is absent
  RUST_LOG                    Log filter (default: info)
";

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parses CLI flags. `Ok(None)` means help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", ThemeMode::from_str)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Some(flags))
}
