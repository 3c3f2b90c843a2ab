mod cli;
mod commands;

use cli::{AssembleParams, MISSING_PATHS, build_cli};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    init_tracing();

    let mut cmd = build_cli();
    let matches = cmd.get_matches_mut();

    match AssembleParams::from_matches(&matches).into_args() {
        Some(args) => commands::assemble::run(args),
        None => {
            // Missing --in/--out is a usage request, not a failure
            eprintln!("{MISSING_PATHS}");
            println!("{}", cmd.render_help());
        }
    }
}

fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}
