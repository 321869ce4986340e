// Filter operations for data processing
// Author: Gabriel Demetrios Lafis

use crate::data::{DataSet, Row, Value};
use super::{DataProcessor, ProcessingError};

/// Filter rows based on a predicate
pub struct FilterProcessor {
    name: String,
    predicate: Box<dyn Fn(&Row, &DataSet) -> bool>,
}

impl FilterProcessor {
    /// Create a new filter processor with a predicate function
    pub fn new<F>(name: &str, predicate: F) -> Self
    where
        F: Fn(&Row, &DataSet) -> bool + 'static,
    {
        FilterProcessor {
            name: name.to_string(),
            predicate: Box::new(predicate),
        }
    }

    /// Create a filter that keeps rows where a column equals a value.
    /// Rows are all dropped when the column does not exist.
    pub fn equals(column: &str, value: Value) -> Self {
        let column = column.to_string();
        Self::new(&format!("equals_{}", column), move |row, dataset| {
            dataset
                .schema
                .index_of(&column)
                .and_then(|i| row.get(i))
                .map_or(false, |v| *v == value)
        })
    }
}

impl DataProcessor for FilterProcessor {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let mut result = DataSet::new(input.schema.clone());

        for row in &input.data {
            if (self.predicate)(row, input) {
                result.add_row(row.clone())?;
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
