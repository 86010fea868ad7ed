//! Presentation of inspection results as styled text or JSON.

use std::{io::Write, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{Array, RecordBatch},
    datatypes::Schema,
    json::ArrayWriter,
    util::{
        display::{ArrayFormatter, FormatOptions},
        pretty::pretty_format_batches,
    },
};
use serde_json::{Map, Value, json};
use tabled::Tabled;
use tracing::debug;

use super::{
    SchemaEntry, Shape, preview, schema, shape,
    style::{
        dim, format_bytes, format_number, header, label, nullable, schema_table, type_tag, value,
    },
};
use crate::{
    loader::SourceFormat,
    table::{Column, Table},
};

/// Everything computed for one inspected file.
pub struct Report {
    pub file: String,
    pub format: SourceFormat,
    pub file_size: Option<u64>,
    pub shape: Shape,
    pub schema: Vec<SchemaEntry>,
    /// `None` when the preview was switched off
    pub preview: Option<Table>,
}

impl Report {
    pub fn new(
        file: impl Into<String>,
        format: SourceFormat,
        table: &Table,
        preview_rows: Option<usize>,
    ) -> Self {
        Self {
            file: file.into(),
            format,
            file_size: None,
            shape: shape(table),
            schema: schema(table),
            preview: preview_rows.map(|n| preview(table, n)),
        }
    }

    pub fn with_file_size(mut self, bytes: u64) -> Self {
        self.file_size = Some(bytes);
        self
    }

    pub fn render_text(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{} {}",
            header(&self.file),
            dim(format!("({})", self.format))
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<10} {}",
            label("Rows:"),
            value(format_number(self.shape.rows))
        )?;
        writeln!(
            out,
            "{:<10} {}",
            label("Columns:"),
            value(format_number(self.shape.columns))
        )?;
        if let Some(size) = self.file_size {
            writeln!(out, "{:<10} {}", label("Size:"), value(format_bytes(size)))?;
        }

        self.render_schema(out)?;

        if let Some(preview) = &self.preview {
            render_preview(preview, out)?;
        }

        Ok(())
    }

    fn render_schema(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "\n{} ({}):",
            header("Schema"),
            value(self.schema.len())
        )?;
        if self.schema.is_empty() {
            writeln!(out, "  {}", dim("(no columns)"))?;
            return Ok(());
        }

        let rows = self.schema.iter().map(|entry| SchemaRow {
            name: entry.name.clone(),
            type_tag: type_tag(entry.type_tag),
            data_type: entry.data_type.clone(),
            nullable: nullable(entry.nullable),
        });
        writeln!(out, "{}", schema_table(rows))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<Value> {
        let preview = match &self.preview {
            Some(table) => Some(table_to_json_rows(table)?),
            None => None,
        };

        Ok(json!({
            "file": self.file,
            "format": self.format,
            "file_size": self.file_size,
            "rows": self.shape.rows,
            "columns": self.shape.columns,
            "schema": self.schema,
            "preview": preview,
        }))
    }

    pub fn render_to_json(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", serde_json::to_string(&self.to_json()?)?)?;
        Ok(())
    }
}

/// Row for schema table display.
#[derive(Tabled)]
struct SchemaRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    type_tag: String,
    #[tabled(rename = "Native type")]
    data_type: String,
    #[tabled(rename = "Nullable")]
    nullable: String,
}

fn render_preview(table: &Table, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "\n{} ({}):",
        header("Preview"),
        value(format!("first {} rows", format_number(table.num_rows())))
    )?;
    if table.num_rows() == 0 || table.num_columns() == 0 {
        writeln!(out, "  {}", dim("(no rows)"))?;
        return Ok(());
    }
    writeln!(
        out,
        "{}",
        pretty_format_batches(std::slice::from_ref(table.batch()))?
    )?;
    Ok(())
}

/// Encode rows as an array of `{column: value}` objects.
///
/// Columns are encoded one at a time so a type the JSON writer rejects only
/// affects its own column.
fn table_to_json_rows(table: &Table) -> Result<Value> {
    if table.num_rows() == 0 {
        return Ok(Value::Array(Vec::new()));
    }

    let mut rows = vec![Map::new(); table.num_rows()];
    for column in table.columns() {
        let cells = match encode_column(&column) {
            Ok(cells) => cells,
            Err(err) => {
                debug!(column = column.name(), %err, "falling back to display strings");
                display_column(&column)
            }
        };
        for (row, cell) in rows.iter_mut().zip(cells) {
            row.insert(column.name().to_string(), cell);
        }
    }
    Ok(Value::Array(rows.into_iter().map(Value::Object).collect()))
}

fn encode_column(column: &Column<'_>) -> Result<Vec<Value>> {
    let name = column.name();
    let schema = Arc::new(Schema::new(vec![column.field().clone()]));
    let batch = RecordBatch::try_new(schema, vec![column.values().clone()])?;

    let mut writer = ArrayWriter::new(Vec::new());
    writer.write(&batch)?;
    writer.finish()?;
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(&writer.into_inner())?;

    // the writer leaves null cells out of their object
    Ok(objects
        .into_iter()
        .map(|mut object| object.remove(name).unwrap_or(Value::Null))
        .collect())
}

/// Render each cell with arrow's display formatting, as the text preview does.
fn display_column(column: &Column<'_>) -> Vec<Value> {
    let values = column.values();
    let formatter = match ArrayFormatter::try_new(values.as_ref(), &FormatOptions::default()) {
        Ok(formatter) => formatter,
        Err(_) => return vec![Value::Null; values.len()],
    };
    (0..values.len())
        .map(|i| {
            if values.is_null(i) {
                Value::Null
            } else {
                Value::String(formatter.value(i).to_string())
            }
        })
        .collect()
}
