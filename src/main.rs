#![forbid(unsafe_code)]

mod error;
mod interceptor;
mod keepalive;
mod signals;

use std::io;
use std::process;
use std::sync::mpsc::channel;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches};
use tracing::Level;

use crate::error::Error;
use crate::keepalive::Settings;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = "interceptor";

fn build_app() -> clap::Command {
    clap::Command::new(NAME)
        .version(VERSION)
        .about("Print a status line every second and keep running through Ctrl-C")
        .arg(Arg::new("verbose")
            .long("verbose")
            .short('v')
            .action(ArgAction::SetTrue)
            .help("Log debug information to stderr")
        )
        .arg(Arg::new("interval")
            .long("interval-ms")
            .short('i')
            .default_value("1000")
            .value_parser(value_parser!(u64).range(1..))
            .help("Time between status lines, defaults to 1000ms")
        )
        .arg(Arg::new("count")
            .long("count")
            .short('n')
            .value_parser(value_parser!(u64).range(1..))
            .help("Exit after this many status lines instead of running forever")
        )
        .arg(Arg::new("ignored")
            .num_args(0..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true)
            .hide(true)
        )
}

fn settings(args: &ArgMatches) -> Settings {
    let defaults = Settings::default();
    Settings {
        interval: args.get_one::<u64>("interval")
            .copied()
            .map(Duration::from_millis)
            .unwrap_or(defaults.interval),
        count: args.get_one::<u64>("count").copied(),
    }
}

fn init_logging(verbose: bool) {
    // stdout is reserved for the status protocol.
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Error> {
    let args = build_app().get_matches();
    init_logging(args.get_flag("verbose"));

    let settings = settings(&args);
    tracing::debug!(?settings, "Starting");

    let (sender, receiver) = channel();
    signals::install_handler(sender)?;
    tracing::info!(pid = process::id(), "Ctrl-C is intercepted; use SIGTERM or SIGKILL to stop");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = keepalive::run(&mut out, &receiver, &settings)?;
    tracing::debug!(ticks = stats.ticks, interrupts = stats.interrupts, "Main loop finished");
    Ok(())
}
