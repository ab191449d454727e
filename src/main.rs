#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    dirtree::logging::init(args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = BufWriter::with_capacity(64 * 1024, stdout.lock());

    let rendered = dirtree::render(&mut out, &args.path, args.files);
    // Lines written before a failure are still part of the output.
    let flushed = out.flush();
    finish(rendered, flushed)
}

/// Combine the render outcome with the final flush. A render error is always
/// the one reported; a flush failure on top of it only adds context.
fn finish(rendered: dirtree::Result<()>, flushed: io::Result<()>) -> Result<()> {
    match (rendered, flushed) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(e).context("failed to flush output"),
        (Err(e), Ok(())) => Err(e.into()),
        (Err(e), Err(flush_err)) => {
            Err(anyhow::Error::new(e).context(format!("also failed to flush output: {flush_err}")))
        }
    }
}
