// Aggregate operations for data processing
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use crate::data::{DataSet, DataType, Field, Row, Schema, Value};
use super::{DataProcessor, ProcessingError};

/// Name of the count column produced by a group by
pub const COUNT_COLUMN: &str = "count";

/// Group by processor counting rows per distinct value of one column.
/// Null cells form no group. Groups come out in first-seen order.
pub struct GroupByProcessor {
    column: String,
}

impl GroupByProcessor {
    /// Count rows per distinct value of `column`
    pub fn count(column: &str) -> Self {
        GroupByProcessor {
            column: column.to_string(),
        }
    }
}

impl DataProcessor for GroupByProcessor {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let col_idx = input.schema.index_of(&self.column).ok_or_else(|| {
            ProcessingError::InvalidArgument(format!("Group by column '{}' not found", self.column))
        })?;
        let key_field = input.schema.fields[col_idx].clone();

        let mut order: Vec<&Value> = Vec::new();
        let mut counts: HashMap<&Value, i64> = HashMap::new();

        for row in &input.data {
            let key = &row.values[col_idx];
            if key.is_null() {
                continue;
            }

            let count = counts.entry(key).or_insert_with(|| {
                order.push(key);
                0
            });
            *count += 1;
        }

        let schema = Schema::new(vec![
            Field::new(key_field.name, key_field.data_type, false),
            Field::new(COUNT_COLUMN.to_string(), DataType::Integer, false),
        ]);
        let mut result = DataSet::new(schema);

        for key in order {
            let count = counts[key];
            result.add_row(Row::new(vec![key.clone(), Value::Integer(count)]))?;
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "group_by"
    }
}
