// Transform operations for data processing
// Author: Gabriel Demetrios Lafis

use chrono::NaiveDateTime;

use crate::data::{DataSet, DataType, Field, Row, Schema, Value};
use super::{DataProcessor, ProcessingError};

/// Timestamp layouts accepted when casting text to a timestamp
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the accepted layouts
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Add a new column computed from each row
pub struct AddColumnTransform {
    name: String,
    data_type: DataType,
    generator: Box<dyn Fn(&Row, &DataSet) -> Value>,
}

impl AddColumnTransform {
    /// Create a new add column transform with a generator function.
    /// The column is flagged as derived.
    pub fn new<F>(name: &str, data_type: DataType, generator: F) -> Self
    where
        F: Fn(&Row, &DataSet) -> Value + 'static,
    {
        AddColumnTransform {
            name: name.to_string(),
            data_type,
            generator: Box::new(generator),
        }
    }
}

impl DataProcessor for AddColumnTransform {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        if input.schema.contains(&self.name) {
            return Err(ProcessingError::InvalidArgument(format!(
                "Column '{}' already exists",
                self.name
            )));
        }

        let mut fields = input.schema.fields.clone();
        fields.push(Field::derived(self.name.clone(), self.data_type));

        let mut result = DataSet::new(Schema::new(fields));

        for row in &input.data {
            let mut values = row.values.clone();
            values.push((self.generator)(row, input));
            result.add_row(Row::new(values))?;
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Cast a column to a different data type
pub struct CastTransform {
    column: String,
    target_type: DataType,
    strict: bool,
}

impl CastTransform {
    /// Cast where any unreadable or empty cell fails the whole transform
    pub fn strict(column: &str, target_type: DataType) -> Self {
        CastTransform {
            column: column.to_string(),
            target_type,
            strict: true,
        }
    }

    /// Cast where unreadable cells become null
    pub fn lenient(column: &str, target_type: DataType) -> Self {
        CastTransform {
            strict: false,
            ..Self::strict(column, target_type)
        }
    }

    /// Cast a value to the target type, `None` if it cannot be read
    fn cast_value(&self, value: &Value) -> Option<Value> {
        match (value, self.target_type) {
            (Value::Null, _) if self.strict => None,
            (Value::Null, _) => Some(Value::Null),

            (Value::Integer(i), DataType::Integer) => Some(Value::Integer(*i)),
            (Value::Integer(i), DataType::Float) => Some(Value::Float(*i as f64)),
            (Value::Float(f), DataType::Float) => Some(Value::Float(*f)),
            (Value::Float(f), DataType::Integer) if f.is_finite() => Some(Value::Integer(*f as i64)),
            (Value::Timestamp(ts), DataType::Timestamp) => Some(Value::Timestamp(*ts)),
            (other, DataType::String) => Some(Value::String(other.to_string())),

            (Value::String(s), DataType::Integer) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
                .map(Value::Integer)
            },
            (Value::String(s), DataType::Float) => {
                s.trim().parse::<f64>().ok().map(Value::Float)
            },
            (Value::String(s), DataType::Timestamp) => parse_timestamp(s).map(Value::Timestamp),

            _ => None,
        }
    }
}

impl DataProcessor for CastTransform {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let col_idx = input.schema.index_of(&self.column).ok_or_else(|| {
            ProcessingError::InvalidArgument(format!("Column '{}' not found", self.column))
        })?;

        let mut fields = input.schema.fields.clone();
        fields[col_idx].data_type = self.target_type;

        let mut result = DataSet::new(Schema::new(fields));

        for (row_idx, row) in input.data.iter().enumerate() {
            let mut values = row.values.clone();
            values[col_idx] = match self.cast_value(&values[col_idx]) {
                Some(value) => value,
                None if self.strict => {
                    return Err(ProcessingError::Cast {
                        column: self.column.clone(),
                        row: row_idx,
                        value: match &values[col_idx] {
                            Value::Null => String::new(),
                            other => other.to_string(),
                        },
                        target: format!("{:?}", self.target_type).to_lowercase(),
                    });
                },
                None => Value::Null,
            };

            result.add_row(Row::new(values))?;
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "cast"
    }
}
