// CSV data source implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use super::{DataError, DataSet, DataSource, DataType, Field, Row, Schema, Value};

/// CSV data source. The first record is always the header.
pub struct CsvSource {
    path: PathBuf,
    name: String,
}

impl CsvSource {
    /// Create a new CSV data source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        CsvSource {
            name: path.to_string_lossy().to_string(),
            path,
        }
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<DataSet, DataError> {
        let file = File::open(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DataError::NotFound {
                path: self.path.clone(),
            },
            _ => DataError::Io(err),
        })?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        // Every source column starts out as a string
        let fields: Vec<Field> = csv_reader
            .headers()?
            .iter()
            .map(|name| Field::new(name.to_string(), DataType::String, true))
            .collect();

        let mut dataset = DataSet::new(Schema::new(fields));

        for result in csv_reader.records() {
            let record = result?;

            let values: Vec<Value> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Value::Null
                    } else {
                        Value::String(field.to_string())
                    }
                })
                .collect();

            dataset.add_row(Row::new(values))?;
        }

        debug!("Read {} rows from {}", dataset.len(), self.name);

        Ok(dataset)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
