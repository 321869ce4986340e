// Human-readable trip reports
// Author: Gabriel Demetrios Lafis

mod browser;
mod format;

pub use browser::*;
pub use format::*;

use std::io::Write;
use std::time::Instant;

use log::debug;

use crate::bikeshare::{Filters, Month};
use crate::data::{columns, DataSet, Value};
use crate::processing::{
    group_counts, mode_and_count, percentage, BirthYearSummary, DurationSummary, ProcessingError,
};
use crate::utils::AppResult;

/// Message shown when the filters leave no trips
pub const NO_DATA_MESSAGE: &str = "No data matches the chosen filters.";

/// The statistics reports offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Time,
    Station,
    Duration,
    User,
}

impl Report {
    fn heading(&self) -> &'static str {
        match self {
            Report::Time => "Calculating The Most Frequent Times of Travel...",
            Report::Station => "Calculating The Most Popular Stations and Trip...",
            Report::Duration => "Calculating Trip Duration...",
            Report::User => "Calculating User Stats...",
        }
    }

    /// Compute and print the report, followed by how long it took
    pub fn render<W: Write>(&self, out: &mut W, trips: &DataSet) -> AppResult<()> {
        writeln!(out, "\n{}\n", self.heading())?;
        let started = Instant::now();

        if trips.is_empty() {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
        } else {
            match self {
                Report::Time => time_stats(out, trips)?,
                Report::Station => station_stats(out, trips)?,
                Report::Duration => trip_duration_stats(out, trips)?,
                Report::User => user_stats(out, trips)?,
            }
        }

        let elapsed = started.elapsed();
        debug!("{:?} report took {:?}", self, elapsed);

        writeln!(out, "\nThis took {} seconds.", format_elapsed(elapsed))?;
        writeln!(out, "{}", rule('-', 40))?;
        writeln!(out, "\n")?;
        Ok(())
    }
}

/// Banner listing the filters in effect
pub fn filters_banner<W: Write>(out: &mut W, filters: &Filters) -> AppResult<()> {
    writeln!(out, "\n\n")?;
    writeln!(out, "{}", rule('=', 50))?;
    writeln!(out, "Chosen Filters:")?;
    writeln!(out, "City: {}", filters.city)?;
    writeln!(out, "Month: {}", filters.month)?;
    writeln!(out, "Day of Week: {}", filters.day)?;
    Ok(())
}

/// Unwrap one statistic. A statistic with no usable cells prints a
/// no-data line instead of failing the report.
fn available<W: Write, T>(
    out: &mut W,
    label: &str,
    result: Result<T, ProcessingError>,
) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ProcessingError::EmptyDataset) => {
            debug!("No values for {}", label);
            writeln!(out, "No data for {}.", label)?;
            Ok(None)
        },
        Err(err) => Err(err.into()),
    }
}

/// One "most common" line with its count and share of all trips
fn most_common_line<W: Write>(
    out: &mut W,
    trips: &DataSet,
    label: &str,
    column: &str,
    describe: impl Fn(&Value) -> String,
) -> AppResult<()> {
    let Some((value, count)) = available(out, label, mode_and_count(trips, column))? else {
        return Ok(());
    };
    writeln!(
        out,
        "The most {} is {}. Count: {} ({})",
        label,
        describe(&value),
        count,
        percentage(count, trips.len())?
    )?;
    Ok(())
}

fn month_label(value: &Value) -> String {
    match value {
        Value::Integer(n) => u32::try_from(*n)
            .ok()
            .and_then(Month::from_number)
            .map(|month| month.to_string())
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// Most common month, day of week and start hour
pub fn time_stats<W: Write>(out: &mut W, trips: &DataSet) -> AppResult<()> {
    most_common_line(out, trips, "common month", columns::MONTH, month_label)?;
    most_common_line(out, trips, "common day of week", columns::DAY_OF_WEEK, Value::to_string)?;
    most_common_line(out, trips, "common start hour", columns::HOUR, Value::to_string)?;
    Ok(())
}

/// Most used start station, end station and route
pub fn station_stats<W: Write>(out: &mut W, trips: &DataSet) -> AppResult<()> {
    most_common_line(out, trips, "commonly used start station", columns::START_STATION, Value::to_string)?;
    most_common_line(out, trips, "commonly used end station", columns::END_STATION, Value::to_string)?;
    most_common_line(out, trips, "common route", columns::ROUTE, Value::to_string)?;
    Ok(())
}

/// Total, mean, max and min travel time
pub fn trip_duration_stats<W: Write>(out: &mut W, trips: &DataSet) -> AppResult<()> {
    let Some(summary) = available(
        out,
        "travel time",
        DurationSummary::from_dataset(trips, columns::TRIP_DURATION),
    )?
    else {
        return Ok(());
    };

    for (label, seconds) in [
        ("Total", summary.total),
        ("Mean", summary.mean),
        ("Max", summary.max),
        ("Min", summary.min),
    ] {
        writeln!(
            out,
            "{} travel time is {} seconds ({})",
            label,
            seconds,
            format_duration(seconds)
        )?;
    }

    Ok(())
}

/// Print a count table the way a grouped series is printed: the column
/// name, then one aligned line per value.
fn write_counts<W: Write>(out: &mut W, column: &str, counts: &[(Value, usize)]) -> AppResult<()> {
    let labels: Vec<String> = counts.iter().map(|(value, _)| value.to_string()).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    writeln!(out, "{}", column)?;
    for (label, (_, count)) in labels.iter().zip(counts) {
        writeln!(out, "{:<width$}    {}", label, count, width = width)?;
    }
    Ok(())
}

/// User types, and gender and birth year breakdowns where the city has them
pub fn user_stats<W: Write>(out: &mut W, trips: &DataSet) -> AppResult<()> {
    writeln!(out)?;
    write_counts(out, columns::USER_TYPE, &group_counts(trips, columns::USER_TYPE)?)?;

    if trips.has_column(columns::GENDER) {
        let genders = group_counts(trips, columns::GENDER)?;
        let known: usize = genders.iter().map(|(_, count)| count).sum();

        writeln!(out, "\n")?;
        write_counts(out, columns::GENDER, &genders)?;
        writeln!(out, "Empty {}", trips.len() - known)?;
    }

    if trips.has_column(columns::BIRTH_YEAR) {
        writeln!(out)?;
        let summary = BirthYearSummary::from_dataset(trips, columns::BIRTH_YEAR);
        if let Some(years) = available(out, "year of birth", summary)? {
            writeln!(out, "The earliest year of birth: {}", years.earliest)?;
            writeln!(out, "The most recent year of birth: {}", years.most_recent)?;
            writeln!(out, "The most common year of birth: {}", years.most_common)?;
        }
    }

    if trips.has_column(columns::AGE_RANGE) {
        let mut ranges = group_counts(trips, columns::AGE_RANGE)?;
        ranges.sort_by(|a, b| b.1.cmp(&a.1));

        writeln!(out, "\n\nUser's date range\n")?;
        write_counts(out, columns::AGE_RANGE, &ranges)?;
    }

    Ok(())
}
