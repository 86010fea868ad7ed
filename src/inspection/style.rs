//! Colours and layout for the text report.

use std::fmt::Display;

use humansize::{BINARY, FormatSizeOptions, format_size};
use num_format::{Locale, ToFormattedString};
use owo_colors::{AnsiColors, OwoColorize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::table::TypeTag;

pub fn header(text: impl Display) -> String {
    text.bold().to_string()
}

pub fn label(text: impl Display) -> String {
    text.cyan().to_string()
}

pub fn value(text: impl Display) -> String {
    text.green().to_string()
}

pub fn dim(text: impl Display) -> String {
    text.dimmed().to_string()
}

/// A column's type tag, coloured by family. Unmapped types are dimmed.
pub fn type_tag(tag: TypeTag) -> String {
    let color = match tag {
        TypeTag::Integer | TypeTag::Float => AnsiColors::Blue,
        TypeTag::String => AnsiColors::Green,
        TypeTag::Boolean => AnsiColors::Magenta,
        TypeTag::Timestamp => AnsiColors::Cyan,
        TypeTag::Categorical => AnsiColors::Yellow,
        TypeTag::Binary => AnsiColors::BrightBlack,
        TypeTag::Unknown => return dim(tag),
    };
    tag.color(color).to_string()
}

/// Nullability marker for the schema table.
pub fn nullable(is_nullable: bool) -> String {
    if is_nullable {
        "yes".to_string()
    } else {
        dim("no")
    }
}

/// Rounded table with a centred header row.
pub fn schema_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table
}

pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, FormatSizeOptions::from(BINARY).decimal_places(1))
}

/// Row and column counts with thousands separators.
pub fn format_number(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
