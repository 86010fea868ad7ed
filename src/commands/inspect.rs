//! Inspect command: load a file and print its shape, schema, and preview.

use std::{
    fs,
    io::{self, Write},
};

use anyhow::Result;
use tracing::debug;

use crate::{Cli, inspection::Report, loader::load_with_format};

pub fn run(args: &Cli) -> Result<()> {
    let (format, table) = load_with_format(&args.file)?;

    let mut report = Report::new(args.file.as_str(), format, &table, args.preview_rows());
    // size is display-only, a failed stat shouldn't fail an otherwise good load
    match fs::metadata(&args.file) {
        Ok(meta) => report = report.with_file_size(meta.len()),
        Err(e) => debug!(error = %e, "could not stat file for size"),
    }

    let mut out = io::stdout().lock();

    if args.format.resolves_to_json() {
        report.render_to_json(&mut out)?;
    } else {
        report.render_text(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
