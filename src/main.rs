use anyhow::Result;
use clap::Parser;
use criba::{cli::Cli, filter, input::Sources};
use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let sources = Sources::from_args(args.files);
    tracing::debug!(
        "reading report paths from {}",
        if sources.is_stdin() { "stdin" } else { "argument files" }
    );

    let mut input = sources.into_reader()?;
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let summary = filter::filter_lines(&mut input, &mut output)?;
    tracing::debug!(
        "processed {} lines, {} failing",
        summary.lines,
        summary.failing
    );

    Ok(())
}
