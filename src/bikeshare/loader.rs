// Trip loading pipeline
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::data::{columns, CsvSource, DataSet, DataSource, DataType, SchemaValidator, Value};
use crate::processing::{CastTransform, DataProcessor, FilterProcessor, Pipeline, ProcessingError};
use crate::utils::AppResult;
use super::{
    age_range_column, day_name, day_of_week_column, hour_column, month_column, route_column,
    City, DayFilter, MonthFilter,
};

/// The user's choice of city and time filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Filters { city, month, day }
    }

    /// No time restriction for the city
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}

/// Parse start times and compute the derived calendar and route columns.
/// `age_range` is only added when the source carries birth years.
pub fn derive_columns(raw: &DataSet) -> Result<DataSet, ProcessingError> {
    let has_birth_year = raw.has_column(columns::BIRTH_YEAR);

    let pipeline = Pipeline::new("derive")
        .add(CastTransform::strict(columns::START_TIME, DataType::Timestamp))
        .add(CastTransform::lenient(columns::TRIP_DURATION, DataType::Float))
        .add(month_column())
        .add(day_of_week_column())
        .add(hour_column())
        .add(route_column())
        .add_optional(has_birth_year.then(|| CastTransform::lenient(columns::BIRTH_YEAR, DataType::Float)))
        .add_optional(has_birth_year.then(age_range_column));

    pipeline.process(raw)
}

/// Restrict a derived table to the chosen month and day
pub fn apply_filters(derived: &DataSet, month: MonthFilter, day: DayFilter) -> Result<DataSet, ProcessingError> {
    let month_filter = match month {
        MonthFilter::All => None,
        MonthFilter::Only(month) => Some(FilterProcessor::equals(
            columns::MONTH,
            Value::Integer(month.number() as i64),
        )),
    };
    let day_filter = match day {
        DayFilter::All => None,
        DayFilter::Only(day) => Some(FilterProcessor::equals(
            columns::DAY_OF_WEEK,
            Value::from(day_name(day)),
        )),
    };

    let pipeline = Pipeline::new("filter")
        .add_optional(month_filter)
        .add_optional(day_filter);

    if pipeline.is_empty() {
        return Ok(derived.clone());
    }

    pipeline.process(derived)
}

/// Load a city's trips from `data_dir` and apply the filters
pub fn load_trips(data_dir: &Path, filters: &Filters) -> AppResult<DataSet> {
    let source = CsvSource::new(filters.city.data_path(data_dir));
    let raw = source.read()?;
    SchemaValidator::validate_trip_schema(&raw.schema)?;

    let derived = derive_columns(&raw)?;
    let filtered = apply_filters(&derived, filters.month, filters.day)?;

    debug!("Derived {} columns for {}", derived.schema.fields.len(), source.name());
    info!(
        "Loaded {} of {} trips ({})",
        filtered.len(),
        derived.len(),
        filters
    );

    Ok(filtered)
}
