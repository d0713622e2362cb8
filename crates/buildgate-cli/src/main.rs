//! CLI entry point - the composition root.

use clap::Parser;

use buildgate_cli::{Cli, logging};

fn main() {
    logging::init_tracing();

    let Cli {} = Cli::parse();

    let code = match buildgate_cli::run(&mut std::io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => {
            let code = e.exit_code();
            let report = anyhow::Error::new(e).context("buildgate could not dispatch the build");
            eprintln!("Error: {report:#}");
            code
        }
    };

    std::process::exit(code);
}
