//! CLI entry point for gridls

use std::process;

use gridls::{Lister, LsError, parse_args};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr, filtered by GRIDLS_LOG (e.g. GRIDLS_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GRIDLS_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let invocation = match parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(LsError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("gridls: {}", e);
            process::exit(e.exit_code());
        }
    };

    let choice = if invocation.config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };

    let mut lister = Lister::new(invocation.config, StandardStream::stdout(choice));
    let result = lister.run(&invocation.operands);
    let warnings = lister.warnings();
    // Flushes stdout before any exit below.
    drop(lister);

    match result {
        Ok(()) if warnings == 0 => {}
        Ok(()) => process::exit(1),
        Err(e) => {
            eprintln!("gridls: {}", e);
            process::exit(e.exit_code());
        }
    }
}
