// Data module for the in-memory trip table
// Author: Gabriel Demetrios Lafis

mod csv;
mod schema;

pub use self::csv::*;
pub use self::schema::*;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Display format for timestamp values
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a generic data source
pub trait DataSource {
    /// Read data from the source
    fn read(&self) -> Result<DataSet, DataError>;

    /// Get the source name
    fn name(&self) -> &str;
}

/// Represents a dataset with schema and data
#[derive(Debug, Clone)]
pub struct DataSet {
    pub schema: Schema,
    pub data: Vec<Row>,
}

impl DataSet {
    /// Create a new empty dataset
    pub fn new(schema: Schema) -> Self {
        DataSet {
            schema,
            data: Vec::new(),
        }
    }

    /// Add a row to the dataset
    pub fn add_row(&mut self, row: Row) -> Result<(), DataError> {
        if row.values.len() != self.schema.fields.len() {
            return Err(DataError::SchemaMismatch {
                expected: self.schema.fields.len(),
                found: row.values.len(),
            });
        }

        self.data.push(row);
        Ok(())
    }

    /// Get the number of rows in the dataset
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether the schema carries a column
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.contains(name)
    }

    /// Iterate over the values of one column
    pub fn column<'a>(&'a self, name: &str) -> Result<impl Iterator<Item = &'a Value> + 'a, DataError> {
        let idx = self
            .schema
            .index_of(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;

        Ok(self.data.iter().map(move |row| &row.values[idx]))
    }
}

/// Represents a row in a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    /// Create a new row with the given values
    pub fn new(values: Vec<Value>) -> Self {
        Row { values }
    }

    /// Get a reference to a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// Represents a value in a row
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) if f.is_finite() => Some(*f),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so values can key a hash map.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::String(s) => s.hash(state),
            Value::Timestamp(ts) => ts.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NaN"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// Represents a schema for a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema with the given fields
    pub fn new(fields: Vec<Field>) -> Self {
        Schema { fields }
    }

    /// Position of a column in the schema
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

/// Represents a field in a schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    /// Computed at load time rather than read from the source
    pub derived: bool,
}

impl Field {
    /// Create a new field
    pub fn new(name: String, data_type: DataType, nullable: bool) -> Self {
        Field {
            name,
            data_type,
            nullable,
            derived: false,
        }
    }

    /// Create a field for a column computed from other columns
    pub fn derived(name: String, data_type: DataType) -> Self {
        Field {
            name,
            data_type,
            nullable: true,
            derived: true,
        }
    }
}

/// Represents a data type for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Float,
    String,
    Timestamp,
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Missing file [{}]", .path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema mismatch: expected {expected} values, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    #[error("Column '{0}' not found")]
    MissingColumn(String),
}

impl From<::csv::Error> for DataError {
    fn from(err: ::csv::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn two_column_set() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("station".to_string(), DataType::String, false),
            Field::new("duration".to_string(), DataType::Float, true),
        ]);
        let mut dataset = DataSet::new(schema);
        dataset
            .add_row(Row::new(vec![Value::from("Canal St"), Value::Float(10.0)]))
            .unwrap();
        dataset
            .add_row(Row::new(vec![Value::from("Clark St"), Value::Null]))
            .unwrap();
        dataset
    }

    #[test]
    fn test_add_row_rejects_wrong_width() {
        let mut dataset = two_column_set();
        let err = dataset.add_row(Row::new(vec![Value::Null])).unwrap_err();
        assert!(matches!(err, DataError::SchemaMismatch { expected: 2, found: 1 }));
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_column_iterates_values() {
        let dataset = two_column_set();
        let stations: Vec<_> = dataset.column("station").unwrap().cloned().collect();
        assert_eq!(stations, vec![Value::from("Canal St"), Value::from("Clark St")]);
        assert!(matches!(dataset.column("Gender"), Err(DataError::MissingColumn(_))));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Float(1992.0).to_string(), "1992.0");
        assert_eq!(Value::Float(12.5).to_string(), "12.5");
        assert_eq!(Value::Null.to_string(), "NaN");
        let ts = NaiveDateTime::parse_from_str("2017-01-01 09:07:57", TIMESTAMP_FORMAT).unwrap();
        assert_eq!(Value::Timestamp(ts).to_string(), "2017-01-01 09:07:57");
    }

    #[test]
    fn test_float_values_hash_by_bits() {
        let mut counts = HashMap::new();
        *counts.entry(Value::Float(1.5)).or_insert(0) += 1;
        *counts.entry(Value::Float(1.5)).or_insert(0) += 1;
        assert_eq!(counts[&Value::Float(1.5)], 2);
    }
}
