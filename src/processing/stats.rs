// Statistical operations over trip table columns
// Author: Gabriel Demetrios Lafis

use crate::data::{DataSet, Value};
use super::{DataProcessor, GroupByProcessor, ProcessingError};

/// Count rows per distinct non-null value of a column, in first-seen order
pub fn group_counts(input: &DataSet, column: &str) -> Result<Vec<(Value, usize)>, ProcessingError> {
    let grouped = GroupByProcessor::count(column).process(input)?;

    Ok(grouped
        .data
        .into_iter()
        .map(|row| {
            let mut values = row.values.into_iter();
            let key = values.next().unwrap_or(Value::Null);
            let count = match values.next() {
                Some(Value::Integer(n)) => n as usize,
                _ => 0,
            };
            (key, count)
        })
        .collect())
}

/// Most frequent non-null value of a column and how often it occurs.
/// When several values share the top count, the one seen first wins.
pub fn mode_and_count(input: &DataSet, column: &str) -> Result<(Value, usize), ProcessingError> {
    let mut best: Option<(Value, usize)> = None;

    for (value, count) in group_counts(input, column)? {
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }

    best.ok_or(ProcessingError::EmptyDataset)
}

/// Numeric cells of a column; null and non-numeric cells are skipped
pub fn numeric_values(input: &DataSet, column: &str) -> Result<Vec<f64>, ProcessingError> {
    Ok(input.column(column)?.filter_map(Value::as_f64).collect())
}

fn non_empty(values: Vec<f64>) -> Result<Vec<f64>, ProcessingError> {
    if values.is_empty() {
        Err(ProcessingError::EmptyDataset)
    } else {
        Ok(values)
    }
}

/// Sum of a numeric column
pub fn sum(input: &DataSet, column: &str) -> Result<f64, ProcessingError> {
    let values = non_empty(numeric_values(input, column)?)?;
    Ok(values.iter().sum())
}

/// Arithmetic mean of a numeric column
pub fn mean(input: &DataSet, column: &str) -> Result<f64, ProcessingError> {
    let values = non_empty(numeric_values(input, column)?)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest value of a numeric column
pub fn min(input: &DataSet, column: &str) -> Result<f64, ProcessingError> {
    let values = non_empty(numeric_values(input, column)?)?;
    Ok(values.iter().fold(f64::INFINITY, |a, &b| a.min(b)))
}

/// Largest value of a numeric column
pub fn max(input: &DataSet, column: &str) -> Result<f64, ProcessingError> {
    let values = non_empty(numeric_values(input, column)?)?;
    Ok(values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)))
}

/// `part / whole * 100` with two decimals and a trailing `%`
pub fn percentage(part: usize, whole: usize) -> Result<String, ProcessingError> {
    if whole == 0 {
        return Err(ProcessingError::EmptyDataset);
    }

    Ok(format!("{:.2}%", part as f64 / whole as f64 * 100.0))
}

/// Duration aggregates in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSummary {
    pub total: i64,
    pub mean: i64,
    pub max: i64,
    pub min: i64,
}

impl DurationSummary {
    /// Summarize a duration column. Fractional seconds are truncated.
    pub fn from_dataset(input: &DataSet, column: &str) -> Result<Self, ProcessingError> {
        Ok(DurationSummary {
            total: sum(input, column)? as i64,
            mean: mean(input, column)? as i64,
            max: max(input, column)? as i64,
            min: min(input, column)? as i64,
        })
    }
}

/// Birth year aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

impl BirthYearSummary {
    pub fn from_dataset(input: &DataSet, column: &str) -> Result<Self, ProcessingError> {
        let (most_common, _) = mode_and_count(input, column)?;
        let most_common = most_common.as_f64().ok_or(ProcessingError::EmptyDataset)?;

        Ok(BirthYearSummary {
            earliest: min(input, column)? as i64,
            most_recent: max(input, column)? as i64,
            most_common: most_common as i64,
        })
    }
}
