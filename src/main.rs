// SPDX-License-Identifier: MPL-2.0
use motion_gallery::app::{self, Flags};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
motion_gallery - gallery of educational animation clips

USAGE:
  motion_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --media-dir <DIR>     Directory holding the clips
  --catalog <FILE>      TOML manifest replacing the built-in catalog
  --variant <NAME>      Built-in catalog: classic or ai-in-motion
  -h, --help            Print this help

Set RUST_LOG (e.g. RUST_LOG=motion_gallery=debug) to adjust logging.
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        media_dir: args.opt_value_from_str("--media-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        variant: args.opt_value_from_str("--variant")?,
    })
}
