use arrow::datatypes::DataType;
use serde::Serialize;
use strum_macros::Display;

/// Semantic column type reported by inspection.
///
/// Arrow's type system is much richer than what a quick sanity check needs, so
/// every [`DataType`] collapses into one of these tags. Types with no obvious
/// counterpart land in [`TypeTag::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TypeTag {
    Integer,
    Float,
    String,
    Boolean,
    Timestamp,
    Categorical,
    Binary,
    Unknown,
}

impl From<&DataType> for TypeTag {
    fn from(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => TypeTag::Integer,
            DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => TypeTag::Float,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => TypeTag::String,
            DataType::Boolean => TypeTag::Boolean,
            DataType::Timestamp(_, _) | DataType::Date32 | DataType::Date64 => TypeTag::Timestamp,
            DataType::Dictionary(_, _) => TypeTag::Categorical,
            DataType::Binary
            | DataType::LargeBinary
            | DataType::FixedSizeBinary(_)
            | DataType::BinaryView => TypeTag::Binary,
            _ => TypeTag::Unknown,
        }
    }
}
