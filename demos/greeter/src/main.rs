//! Greeter demo entry point: bind the command line and run the selected
//! command.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use argp::ParseErrorPolicy;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let out = Rc::new(RefCell::new(io::stdout()));
    let mut cmd = greeter::cli::build(&out, ParseErrorPolicy::Exit);
    cmd.run_from_env().map_err(color_eyre::eyre::Report::from)
}
