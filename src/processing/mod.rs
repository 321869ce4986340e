// Processing module for trip table transformation and analysis
// Author: Gabriel Demetrios Lafis

mod transform;
mod filter;
mod aggregate;
mod stats;

pub use transform::*;
pub use filter::*;
pub use aggregate::*;
pub use stats::*;

use log::trace;
use thiserror::Error;

use crate::data::{DataError, DataSet};

/// Represents a data processor that transforms data
pub trait DataProcessor {
    /// Process a dataset and return a new dataset
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError>;

    /// Get the processor name
    fn name(&self) -> &str;
}

/// Represents an error in the processing module
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Cannot read '{value}' in column '{column}' (row {row}) as {target}")]
    Cast {
        column: String,
        row: usize,
        value: String,
        target: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No rows to aggregate")]
    EmptyDataset,
}

/// Pipeline for chaining multiple processors
pub struct Pipeline {
    name: String,
    processors: Vec<Box<dyn DataProcessor>>,
}

impl Pipeline {
    /// Create a new pipeline with the given name
    pub fn new(name: &str) -> Self {
        Pipeline {
            name: name.to_string(),
            processors: Vec::new(),
        }
    }

    /// Add a processor to the pipeline
    pub fn add<P: DataProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Add a processor only when it is present
    pub fn add_optional<P: DataProcessor + 'static>(self, processor: Option<P>) -> Self {
        match processor {
            Some(processor) => self.add(processor),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Execute the pipeline on a dataset
    pub fn execute(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let mut current = input.clone();

        for processor in &self.processors {
            current = processor.process(&current)?;
            trace!("{}: {} -> {} rows", self.name, processor.name(), current.len());
        }

        Ok(current)
    }
}

impl DataProcessor for Pipeline {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        self.execute(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
