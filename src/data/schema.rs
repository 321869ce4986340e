// Trip schema definition and validation
// Author: Gabriel Demetrios Lafis

use super::{DataError, Schema};

/// Column names found in the trip source files
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    // Derived at load time
    pub const MONTH: &str = "month";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const HOUR: &str = "hour";
    pub const ROUTE: &str = "route";
    pub const AGE_RANGE: &str = "age_range";
}

/// Columns every trip file must carry
pub const REQUIRED_TRIP_COLUMNS: [&str; 6] = [
    columns::START_TIME,
    columns::END_TIME,
    columns::TRIP_DURATION,
    columns::START_STATION,
    columns::END_STATION,
    columns::USER_TYPE,
];

/// Schema validator for ensuring a source carries the expected columns
pub struct SchemaValidator;

impl SchemaValidator {
    /// Fail on the first column that the schema does not carry
    pub fn require_columns(schema: &Schema, required: &[&str]) -> Result<(), DataError> {
        for name in required {
            if !schema.contains(name) {
                return Err(DataError::MissingColumn(name.to_string()));
            }
        }

        Ok(())
    }

    /// Validate that a schema looks like a trip file
    pub fn validate_trip_schema(schema: &Schema) -> Result<(), DataError> {
        Self::require_columns(schema, &REQUIRED_TRIP_COLUMNS)
    }
}
