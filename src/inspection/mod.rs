//! Read-only reports derived from a loaded [`Table`].
//!
//! [`shape`], [`schema`] and [`preview`] are pure: calling them any number of
//! times, in any order, on the same table gives the same answer.

pub mod report;
pub mod style;

use serde::Serialize;

use crate::table::{Table, TypeTag};

pub use report::Report;

/// Rows shown by [`preview`] when the caller doesn't ask for a specific count.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

/// One column of a table's schema, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// decoder-native type, e.g. `Timestamp(Microsecond, None)`
    pub data_type: String,
    pub nullable: bool,
}

pub fn shape(table: &Table) -> Shape {
    Shape {
        rows: table.num_rows(),
        columns: table.num_columns(),
    }
}

pub fn schema(table: &Table) -> Vec<SchemaEntry> {
    table
        .columns()
        .map(|column| SchemaEntry {
            name: column.name().to_string(),
            type_tag: column.type_tag(),
            data_type: column.data_type().to_string(),
            nullable: column.is_nullable(),
        })
        .collect()
}

/// The first `n` rows of `table` in stored order, capped at the rows available.
pub fn preview(table: &Table, n: usize) -> Table {
    table.slice(0, n)
}
