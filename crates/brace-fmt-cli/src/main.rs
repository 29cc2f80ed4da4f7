use brace_fmt_cli::{
    args::{Colors, FmtArgs},
    BraceFmt,
};
use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = FmtArgs::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let mut builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    builder = match args.colors {
        Colors::Auto => builder,
        Colors::Always => builder.with_ansi(true),
        Colors::Never => builder.with_ansi(false),
    };
    builder.init();

    match BraceFmt::new().execute(args) {
        Ok(()) => exit(0),
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "operation failed");
            exit(1);
        }
    }
}
