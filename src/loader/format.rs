//! On-disk format detection.

use std::{
    fs::File,
    io::{Seek, SeekFrom},
};

use arrow::ipc::reader::StreamReader;
use serde::Serialize;
use strum_macros::Display;

use super::{
    error::FormatCause,
    magic::{ARROW_MAGIC, PARQUET_MAGIC, ipc_stream_prefix_fits, magic_bytes_match_both_ends},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    #[strum(serialize = "Parquet")]
    Parquet,
    #[strum(serialize = "Arrow IPC (file)")]
    ArrowFile,
    #[strum(serialize = "Arrow IPC (stream)")]
    ArrowStream,
}

/// Sniff the format of an already opened file.
///
/// Tries each format in order of most specific magic bytes to least:
/// 1. Parquet (PAR1 magic)
/// 2. Arrow file (ARROW1 magic)
/// 3. Arrow stream (no magic, try parsing the schema message)
///
/// The file is rewound to the start before returning.
pub(crate) fn sniff(file: &mut File) -> Result<SourceFormat, FormatCause> {
    let format = if magic_bytes_match_both_ends(file, PARQUET_MAGIC)? {
        SourceFormat::Parquet
    } else if magic_bytes_match_both_ends(file, ARROW_MAGIC)? {
        SourceFormat::ArrowFile
    } else if ipc_stream_prefix_fits(file)? && StreamReader::try_new(&mut *file, None).is_ok() {
        SourceFormat::ArrowStream
    } else {
        file.seek(SeekFrom::Start(0))?;
        return Err(FormatCause::Unrecognized);
    };

    file.seek(SeekFrom::Start(0))?;
    Ok(format)
}
