//! Turns a file path into a fully materialized [`Table`].
//!
//! Loading is eager: every record batch is decoded and concatenated before
//! [`load`] returns, so inspection never touches the file again.

pub mod error;
pub mod format;
pub mod magic;

use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use arrow::{
    array::RecordBatch,
    datatypes::SchemaRef,
    error::ArrowError,
    ipc::reader::{FileReader, StreamReader},
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::{debug, trace};

use crate::table::Table;

pub use error::{FormatCause, LoadError, LoadErrorKind};
pub use format::SourceFormat;

/// Load a Parquet or Arrow IPC file into memory.
pub fn load(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    load_with_format(path).map(|(_, table)| table)
}

/// Like [`load`], also reporting which on-disk format was detected.
pub fn load_with_format(path: impl AsRef<Path>) -> Result<(SourceFormat, Table), LoadError> {
    let path = path.as_ref();
    let mut file = open(path)?;
    let format = format::sniff(&mut file).map_err(|cause| LoadError::format(path, cause))?;
    debug!(path = %path.display(), %format, "detected format");

    let (schema, batches) = match format {
        SourceFormat::Parquet => read_parquet(file),
        SourceFormat::ArrowFile => read_arrow_file(file),
        SourceFormat::ArrowStream => read_arrow_stream(file),
    }
    .map_err(|cause| LoadError::format(path, cause))?;
    trace!(batches = batches.len(), "decoded record batches");

    let table =
        Table::from_batches(schema, &batches).map_err(|cause| LoadError::format(path, cause))?;
    debug!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "materialized table"
    );

    Ok((format, table))
}

/// Detect the format of a file without decoding its data.
pub fn detect_format(path: impl AsRef<Path>) -> Result<SourceFormat, LoadError> {
    let path = path.as_ref();
    let mut file = open(path)?;
    format::sniff(&mut file).map_err(|cause| LoadError::format(path, cause))
}

fn open(path: &Path) -> Result<File, LoadError> {
    let metadata = fs::metadata(path).map_err(|e| LoadError::from_open(path, e))?;
    if !metadata.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| LoadError::from_open(path, e))
}

fn read_parquet(file: File) -> Result<(SchemaRef, Vec<RecordBatch>), FormatCause> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let batches = builder.build()?.collect::<Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}

fn read_arrow_file(file: File) -> Result<(SchemaRef, Vec<RecordBatch>), FormatCause> {
    let reader = FileReader::try_new(file, None)?;
    let schema = reader.schema();
    let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}

fn read_arrow_stream(file: File) -> Result<(SchemaRef, Vec<RecordBatch>), FormatCause> {
    let reader = StreamReader::try_new(BufReader::new(file), None)?;
    let schema = reader.schema();
    let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;
    Ok((schema, batches))
}
