//! In-memory table model used by the loader and inspection reports.

pub mod type_tag;

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef, RecordBatch, RecordBatchOptions, new_empty_array},
    compute::concat_batches,
    datatypes::{DataType, Field, SchemaRef},
    error::ArrowError,
};

pub use type_tag::TypeTag;

/// An immutable, fully resident table.
///
/// Backed by a single Arrow [`RecordBatch`], so every column is guaranteed to
/// hold exactly [`Table::num_rows`] values. Nothing hands out mutable access;
/// once built the table only ever gets read or sliced.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Concatenate decoded batches into one contiguous table.
    ///
    /// An empty batch list still produces a valid zero-row table carrying `schema`.
    pub fn from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Self, ArrowError> {
        if batches.is_empty() {
            return Self::empty(schema);
        }
        let batch = concat_batches(&schema, batches)?;
        Ok(Self { batch })
    }

    /// A zero-row table with the given schema.
    pub fn empty(schema: SchemaRef) -> Result<Self, ArrowError> {
        // a zero-column batch needs an explicit row count, so go through options
        let options = RecordBatchOptions::new().with_row_count(Some(0));
        let columns = schema
            .fields()
            .iter()
            .map(|f| new_empty_array(f.data_type()))
            .collect();
        let batch = RecordBatch::try_new_with_options(schema, columns, &options)?;
        Ok(Self { batch })
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn column(&self, index: usize) -> Option<Column<'_>> {
        let schema = self.batch.schema_ref();
        let field = schema.fields().get(index)?;
        Some(Column {
            field,
            values: self.batch.column(index),
        })
    }

    /// Columns in their stored order.
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .zip(self.batch.columns())
            .map(|(field, values)| Column { field, values })
    }

    /// Zero-copy view over `length` rows starting at `offset`, clamped to the table bounds.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        let offset = offset.min(self.num_rows());
        let length = length.min(self.num_rows() - offset);
        Self {
            batch: self.batch.slice(offset, length),
        }
    }
}

impl From<RecordBatch> for Table {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}

/// Borrowed view of one column of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    field: &'a Arc<Field>,
    values: &'a ArrayRef,
}

impl<'a> Column<'a> {
    pub fn field(&self) -> &'a Arc<Field> {
        self.field
    }

    pub fn name(&self) -> &'a str {
        self.field.name()
    }

    pub fn data_type(&self) -> &'a DataType {
        self.field.data_type()
    }

    pub fn type_tag(&self) -> TypeTag {
        TypeTag::from(self.field.data_type())
    }

    pub fn is_nullable(&self) -> bool {
        self.field.is_nullable()
    }

    pub fn values(&self) -> &'a ArrayRef {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
