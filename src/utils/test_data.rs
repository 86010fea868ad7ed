//! Test data factory for building Arrow `RecordBatch`es and fixture files.
//!
//! # Usage
//!
//! ```rust
//! use table_peek::utils::test_data::TestBatch;
//!
//! let batch = TestBatch::builder()
//!     .column_i32("id", &[1, 2, 3])
//!     .column_string("name", &["a", "b", "c"])
//!     .build();
//!
//! // or using a preset batch
//! let batch = TestBatch::simple();  // id: i32, name: string (3 rows)
//! ```

use std::{fs::File, path::Path, sync::Arc};

use arrow::{
    array::{
        ArrayRef, BooleanArray, Date32Array, DictionaryArray, Float64Array, Int32Array,
        Int64Array, ListArray, RecordBatch, StringArray, TimestampMicrosecondArray, UnionArray,
    },
    buffer::{OffsetBuffer, ScalarBuffer},
    datatypes::{DataType, Field, Int32Type, Schema, SchemaRef, UnionFields},
    ipc::writer::{FileWriter as ArrowFileWriter, StreamWriter as ArrowStreamWriter},
};
use parquet::arrow::ArrowWriter;

#[derive(Default)]
pub struct TestBatchBuilder {
    columns: Vec<(String, ArrayRef, bool)>, // (name, array, nullable)
}

impl TestBatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_i32(mut self, name: &str, values: &[i32]) -> Self {
        let array: ArrayRef = Arc::new(Int32Array::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    pub fn column_i32_nullable(mut self, name: &str, values: &[Option<i32>]) -> Self {
        let array: ArrayRef = Arc::new(Int32Array::from(values.to_vec()));
        self.columns.push((name.to_string(), array, true));
        self
    }

    pub fn column_i64(mut self, name: &str, values: &[i64]) -> Self {
        let array: ArrayRef = Arc::new(Int64Array::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    pub fn column_f64(mut self, name: &str, values: &[f64]) -> Self {
        let array: ArrayRef = Arc::new(Float64Array::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    pub fn column_string(mut self, name: &str, values: &[&str]) -> Self {
        let array: ArrayRef = Arc::new(StringArray::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    pub fn column_bool(mut self, name: &str, values: &[bool]) -> Self {
        let array: ArrayRef = Arc::new(BooleanArray::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    /// values are days since epoch
    pub fn column_date32(mut self, name: &str, values: &[i32]) -> Self {
        let array: ArrayRef = Arc::new(Date32Array::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    /// values are microseconds since epoch
    pub fn column_timestamp_micros(mut self, name: &str, values: &[i64]) -> Self {
        let array: ArrayRef = Arc::new(TimestampMicrosecondArray::from(values.to_vec()));
        self.columns.push((name.to_string(), array, false));
        self
    }

    /// dictionary-encoded strings with i32 keys
    pub fn column_dictionary(mut self, name: &str, values: &[&str]) -> Self {
        let array: DictionaryArray<Int32Type> = values.iter().copied().collect();
        self.columns.push((name.to_string(), Arc::new(array), false));
        self
    }

    pub fn column_list_i32(mut self, name: &str, values: &[Vec<i32>]) -> Self {
        let lengths = values.iter().map(Vec::len);
        let offsets = OffsetBuffer::from_lengths(lengths);
        let flat: Vec<i32> = values.iter().flatten().copied().collect();
        let values_array: ArrayRef = Arc::new(Int32Array::from(flat));
        let field = Arc::new(Field::new("item", DataType::Int32, false));
        let list_array = ListArray::new(field, offsets, values_array, None);
        self.columns
            .push((name.to_string(), Arc::new(list_array), false));
        self
    }

    /// Sparse union of `int` (type id 0) and `str` (type id 1).
    ///
    /// Both children hold one slot per row; `type_ids` picks which one is live.
    pub fn column_sparse_union(
        mut self,
        name: &str,
        type_ids: &[i8],
        ints: &[i32],
        strings: &[&str],
    ) -> Self {
        let fields = UnionFields::new(
            [0, 1],
            [
                Field::new("int", DataType::Int32, false),
                Field::new("str", DataType::Utf8, false),
            ],
        );
        let children: Vec<ArrayRef> = vec![
            Arc::new(Int32Array::from(ints.to_vec())),
            Arc::new(StringArray::from(strings.to_vec())),
        ];
        let array = UnionArray::try_new(
            fields,
            ScalarBuffer::from(type_ids.to_vec()),
            None,
            children,
        )
        .expect("failed to create UnionArray");
        self.columns
            .push((name.to_string(), Arc::new(array), false));
        self
    }

    pub fn build(self) -> RecordBatch {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|(name, array, nullable)| Field::new(name, array.data_type().clone(), *nullable))
            .collect();

        let schema = Arc::new(Schema::new(fields));
        let arrays: Vec<ArrayRef> = self
            .columns
            .into_iter()
            .map(|(_, array, _)| array)
            .collect();

        RecordBatch::try_new(schema, arrays).expect("failed to create RecordBatch")
    }
}

pub struct TestBatch;

impl TestBatch {
    pub fn builder() -> TestBatchBuilder {
        TestBatchBuilder::new()
    }

    /// id (i32), name (string) - 3 rows
    pub fn simple() -> RecordBatch {
        TestBatchBuilder::new()
            .column_i32("id", &[1, 2, 3])
            .column_string("name", &["a", "b", "c"])
            .build()
    }

    pub fn simple_with(ids: &[i32], names: &[&str]) -> RecordBatch {
        TestBatchBuilder::new()
            .column_i32("id", ids)
            .column_string("name", names)
            .build()
    }

    /// id: i32, name: string
    pub fn simple_schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("name", DataType::Utf8, false),
        ]))
    }

    /// id, name, ts - 3 rows
    pub fn with_timestamps() -> RecordBatch {
        TestBatchBuilder::new()
            .column_i32("id", &[1, 2, 3])
            .column_string("name", &["a", "b", "c"])
            .column_timestamp_micros(
                "ts",
                &[
                    1_640_000_000_000_000,
                    1_640_000_001_000_000,
                    1_640_000_002_000_000,
                ],
            )
            .build()
    }

    /// id (i64), name (string), active (bool) - `rows` rows
    ///
    /// ids count up from 0, names are `user_{id}`, every third user is inactive.
    pub fn users(rows: usize) -> RecordBatch {
        let ids: Vec<i64> = (0..rows as i64).collect();
        let names: Vec<String> = ids.iter().map(|id| format!("user_{id}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let active: Vec<bool> = ids.iter().map(|id| id % 3 != 0).collect();

        TestBatchBuilder::new()
            .column_i64("id", &ids)
            .column_string("name", &names)
            .column_bool("active", &active)
            .build()
    }

    /// one column per semantic type plus an unmapped list column - 2 rows
    pub fn mixed_types() -> RecordBatch {
        TestBatchBuilder::new()
            .column_i32("count", &[1, 2])
            .column_f64("score", &[0.5, 1.5])
            .column_string("label", &["x", "y"])
            .column_bool("flag", &[true, false])
            .column_date32("day", &[19000, 19001])
            .column_dictionary("region", &["us", "eu"])
            .column_list_i32("tags", &[vec![1, 2], vec![3]])
            .build()
    }

    /// id (i32), value (sparse union of int/str) - 2 rows
    pub fn with_union() -> RecordBatch {
        TestBatchBuilder::new()
            .column_i32("id", &[1, 2])
            .column_sparse_union("value", &[0, 1], &[42, 0], &["", "forty-two"])
            .build()
    }
}

pub struct TestFile;

impl TestFile {
    pub fn write_arrow(path: &Path, batches: &[RecordBatch]) {
        assert!(!batches.is_empty(), "need at least one batch");
        let schema = batches[0].schema();
        let file = File::create(path).expect("failed to create file");
        let mut writer = ArrowFileWriter::try_new(file, &schema).expect("failed to create writer");
        for batch in batches {
            writer.write(batch).expect("failed to write batch");
        }
        writer.finish().expect("failed to finish writing");
    }

    pub fn write_arrow_batch(path: &Path, batch: &RecordBatch) {
        Self::write_arrow(path, std::slice::from_ref(batch));
    }

    /// schema only, no data
    pub fn write_arrow_empty(path: &Path, schema: &SchemaRef) {
        let file = File::create(path).expect("failed to create file");
        let mut writer = ArrowFileWriter::try_new(file, schema).expect("failed to create writer");
        writer.finish().expect("failed to finish writing");
    }

    pub fn write_arrow_stream(path: &Path, batches: &[RecordBatch]) {
        assert!(!batches.is_empty(), "need at least one batch");
        let schema = batches[0].schema();
        let file = File::create(path).expect("failed to create file");
        let mut writer =
            ArrowStreamWriter::try_new(file, &schema).expect("failed to create writer");
        for batch in batches {
            writer.write(batch).expect("failed to write batch");
        }
        writer.finish().expect("failed to finish writing");
    }

    pub fn write_parquet(path: &Path, batches: &[RecordBatch]) {
        assert!(!batches.is_empty(), "need at least one batch");
        let schema = batches[0].schema();
        let file = File::create(path).expect("failed to create file");
        let mut writer = ArrowWriter::try_new(file, schema, None).expect("failed to create writer");
        for batch in batches {
            writer.write(batch).expect("failed to write batch");
        }
        writer.close().expect("failed to close writer");
    }

    /// schema only, no row groups
    pub fn write_parquet_empty(path: &Path, schema: &SchemaRef) {
        let file = File::create(path).expect("failed to create file");
        let writer =
            ArrowWriter::try_new(file, schema.clone(), None).expect("failed to create writer");
        writer.close().expect("failed to close writer");
    }

    pub fn write_parquet_batch(path: &Path, batch: &RecordBatch) {
        Self::write_parquet(path, std::slice::from_ref(batch));
    }
}
