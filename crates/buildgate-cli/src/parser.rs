//! Command-line parser.
//!
//! buildgate takes no options that change what it does; clap is here for
//! `--help`, `--version`, and to reject stray arguments.

use clap::Parser;

/// Build with the local toolchain in release mode, or fall back to the
/// prebuilt binary when the toolchain is not installed.
#[derive(Parser, Debug)]
#[command(name = "buildgate", version, about)]
pub struct Cli {}
