// Derived trip columns
// Author: Gabriel Demetrios Lafis

use chrono::{Datelike, Timelike};

use crate::data::{columns, DataSet, DataType, Row, Value};
use crate::processing::AddColumnTransform;
use super::day_name;

/// Bucket value for a birth year that cannot be read
pub const NOT_APPLICABLE: &str = "N/A";

/// Width of an age bucket in years
pub const AGE_BUCKET_YEARS: i64 = 10;

static MISSING: Value = Value::Null;

fn cell<'a>(row: &'a Row, dataset: &DataSet, column: &str) -> &'a Value {
    dataset
        .schema
        .index_of(column)
        .and_then(|i| row.get(i))
        .unwrap_or(&MISSING)
}

/// Label joining the start and end station of a trip
pub fn route_label(start: &Value, end: &Value) -> String {
    format!("FROM: {} TO: {}", start, end)
}

/// Decade bucket of a birth year, e.g. 1994 -> "1990-2000"
pub fn age_range_label(birth_year: &Value) -> String {
    match birth_year.as_f64() {
        Some(year) => {
            let start = (year.trunc() as i64).div_euclid(AGE_BUCKET_YEARS) * AGE_BUCKET_YEARS;
            format!("{}-{}", start, start + AGE_BUCKET_YEARS)
        },
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Calendar month of the trip start
pub fn month_column() -> AddColumnTransform {
    AddColumnTransform::new(columns::MONTH, DataType::Integer, |row, dataset| {
        match cell(row, dataset, columns::START_TIME).as_timestamp() {
            Some(ts) => Value::Integer(ts.month() as i64),
            None => Value::Null,
        }
    })
}

/// Weekday name of the trip start
pub fn day_of_week_column() -> AddColumnTransform {
    AddColumnTransform::new(columns::DAY_OF_WEEK, DataType::String, |row, dataset| {
        match cell(row, dataset, columns::START_TIME).as_timestamp() {
            Some(ts) => Value::from(day_name(ts.weekday())),
            None => Value::Null,
        }
    })
}

/// Hour of the trip start
pub fn hour_column() -> AddColumnTransform {
    AddColumnTransform::new(columns::HOUR, DataType::Integer, |row, dataset| {
        match cell(row, dataset, columns::START_TIME).as_timestamp() {
            Some(ts) => Value::Integer(ts.hour() as i64),
            None => Value::Null,
        }
    })
}

/// Start and end station joined as a route label
pub fn route_column() -> AddColumnTransform {
    AddColumnTransform::new(columns::ROUTE, DataType::String, |row, dataset| {
        Value::String(route_label(
            cell(row, dataset, columns::START_STATION),
            cell(row, dataset, columns::END_STATION),
        ))
    })
}

/// Birth year decade, only meaningful when the source has birth years
pub fn age_range_column() -> AddColumnTransform {
    AddColumnTransform::new(columns::AGE_RANGE, DataType::String, |row, dataset| {
        Value::String(age_range_label(cell(row, dataset, columns::BIRTH_YEAR)))
    })
}
