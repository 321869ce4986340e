// Trip loading and report tests
// Author: Gabriel Demetrios Lafis

mod common;

use bikeshare_explorer::{
    bikeshare::{load_trips, City, DayFilter, Filters, Month, MonthFilter},
    data::{columns, Value},
    processing::{mode_and_count, ProcessingError},
    report::{Report, NO_DATA_MESSAGE},
    utils::AppError,
};
use chrono::Weekday;

use common::{data_dir, washington_csv, CHICAGO_CSV, SPARSE_CSV};

fn column_values(trips: &bikeshare_explorer::DataSet, column: &str) -> Vec<Value> {
    trips.column(column).unwrap().cloned().collect()
}

fn render(report: Report, trips: &bikeshare_explorer::DataSet) -> String {
    let mut out = Vec::new();
    report.render(&mut out, trips).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_unfiltered_load_keeps_every_row() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV), ("washington.csv", &washington_csv(7))]);

    for (city, rows) in [(City::Chicago, 4), (City::Washington, 7)] {
        let trips = load_trips(dir.path(), &Filters::unfiltered(city)).unwrap();
        assert_eq!(trips.len(), rows);

        for column in [columns::MONTH, columns::DAY_OF_WEEK, columns::HOUR, columns::ROUTE] {
            assert!(column_values(&trips, column).iter().all(|v| !v.is_null()));
        }
    }
}

#[test]
fn test_derived_columns() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Chicago)).unwrap();

    assert_eq!(
        column_values(&trips, columns::MONTH),
        vec![Value::Integer(1), Value::Integer(1), Value::Integer(3), Value::Integer(6)]
    );
    assert_eq!(
        column_values(&trips, columns::DAY_OF_WEEK),
        vec![
            Value::from("Sunday"),
            Value::from("Monday"),
            Value::from("Monday"),
            Value::from("Friday"),
        ]
    );
    assert_eq!(
        column_values(&trips, columns::HOUR),
        vec![Value::Integer(9), Value::Integer(17), Value::Integer(8), Value::Integer(17)]
    );
    assert_eq!(
        column_values(&trips, columns::ROUTE)[2],
        Value::from("FROM: Clark St TO: Canal St")
    );
    assert_eq!(
        column_values(&trips, columns::AGE_RANGE),
        vec![
            Value::from("1980-1990"),
            Value::from("1990-2000"),
            Value::from("N/A"),
            Value::from("N/A"),
        ]
    );
}

#[test]
fn test_month_filter() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let filters = Filters::new(City::Chicago, MonthFilter::Only(Month::January), DayFilter::All);

    let trips = load_trips(dir.path(), &filters).unwrap();

    assert_eq!(trips.len(), 2);
    assert!(column_values(&trips, columns::MONTH)
        .iter()
        .all(|m| *m == Value::Integer(1)));
}

#[test]
fn test_day_filter() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let filters = Filters::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Mon));

    let trips = load_trips(dir.path(), &filters).unwrap();

    assert_eq!(trips.len(), 2);
    assert!(column_values(&trips, columns::DAY_OF_WEEK)
        .iter()
        .all(|d| *d == Value::from("Monday")));
}

#[test]
fn test_month_and_day_filters_combine() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let filters = Filters::new(
        City::Chicago,
        MonthFilter::Only(Month::March),
        DayFilter::Only(Weekday::Mon),
    );

    let trips = load_trips(dir.path(), &filters).unwrap();

    assert_eq!(trips.len(), 1);
    assert_eq!(mode_and_count(&trips, columns::START_STATION).unwrap(), (Value::from("Clark St"), 1));
}

#[test]
fn test_city_without_demographics() {
    let dir = data_dir(&[("washington.csv", &washington_csv(3))]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Washington)).unwrap();

    assert!(!trips.has_column(columns::AGE_RANGE));

    let text = render(Report::User, &trips);
    assert!(text.contains("Subscriber    3"));
    assert!(!text.contains("Gender"));
    assert!(!text.contains("year of birth"));
    assert!(!text.contains("age_range"));
}

#[test]
fn test_user_stats_with_demographics() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Chicago)).unwrap();

    let text = render(Report::User, &trips);

    assert!(text.contains("Male      2"));
    assert!(text.contains("Empty 1"));
    assert!(text.contains("The earliest year of birth: 1989"));
    assert!(text.contains("The most recent year of birth: 1992"));
    assert!(text.contains("The most common year of birth: 1989"));
    assert!(text.contains("User's date range"));
    // N/A has two rows, so it sorts first
    let na = text.find("N/A").unwrap();
    assert!(na < text.find("1980-1990").unwrap());
}

#[test]
fn test_time_and_station_reports() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Chicago)).unwrap();

    let text = render(Report::Time, &trips);
    assert!(text.contains("The most common month is January. Count: 2 (50.00%)"));
    assert!(text.contains("The most common day of week is Monday. Count: 2 (50.00%)"));
    assert!(text.contains("The most common start hour is 17. Count: 2 (50.00%)"));
    assert!(text.contains("This took "));

    let text = render(Report::Station, &trips);
    assert!(text.contains("The most commonly used start station is Canal St. Count: 3 (75.00%)"));
    assert!(text.contains("The most common route is FROM: Canal St TO: Clark St. Count: 2 (50.00%)"));
}

#[test]
fn test_duration_report() {
    let dir = data_dir(&[("washington.csv", &washington_csv(3))]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Washington)).unwrap();

    // 60.5 + 120.5 + 180.5
    let text = render(Report::Duration, &trips);
    assert!(text.contains("Total travel time is 361 seconds (0:06:01)"));
    assert!(text.contains("Mean travel time is 120 seconds (0:02:00)"));
    assert!(text.contains("Max travel time is 180 seconds (0:03:00)"));
    assert!(text.contains("Min travel time is 60 seconds (0:01:00)"));
}

#[test]
fn test_empty_selection_reports_no_data() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let filters = Filters::new(City::Chicago, MonthFilter::Only(Month::April), DayFilter::All);
    let trips = load_trips(dir.path(), &filters).unwrap();

    assert!(trips.is_empty());
    for report in [Report::Time, Report::Station, Report::Duration, Report::User] {
        assert!(render(report, &trips).contains(NO_DATA_MESSAGE));
    }
}

#[test]
fn test_report_without_usable_durations() {
    let dir = data_dir(&[("washington.csv", SPARSE_CSV)]);
    let trips = load_trips(dir.path(), &Filters::unfiltered(City::Washington)).unwrap();
    assert_eq!(trips.len(), 2);

    let text = render(Report::Duration, &trips);
    assert!(text.contains("No data for travel time."));
    assert!(!text.contains(NO_DATA_MESSAGE));
    assert!(text.contains("This took"));

    let text = render(Report::Station, &trips);
    assert!(text.contains("The most commonly used start station is Canal St. Count: 1 (50.00%)"));
}

#[test]
fn test_missing_file() {
    let dir = data_dir(&[]);
    let err = load_trips(dir.path(), &Filters::unfiltered(City::NewYorkCity)).unwrap_err();

    assert!(err.is_data_not_found());
    assert!(err.to_string().contains("new_york_city.csv"));
}

#[test]
fn test_corrupt_start_time_fails_the_load() {
    let csv = CHICAGO_CSV.replace("2017-03-06 08:00:00", "not a time");
    let dir = data_dir(&[("chicago.csv", &csv)]);

    match load_trips(dir.path(), &Filters::unfiltered(City::Chicago)) {
        Err(AppError::Processing(ProcessingError::Cast { column, row, .. })) => {
            assert_eq!(column, columns::START_TIME);
            assert_eq!(row, 2);
        },
        other => panic!("unexpected result: {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_blank_start_time_fails_the_load() {
    let csv = CHICAGO_CSV.replace("2017-03-06 08:00:00", "");
    let dir = data_dir(&[("chicago.csv", &csv)]);

    match load_trips(dir.path(), &Filters::unfiltered(City::Chicago)) {
        Err(AppError::Processing(ProcessingError::Cast { column, row, value, .. })) => {
            assert_eq!(column, columns::START_TIME);
            assert_eq!(row, 2);
            assert_eq!(value, "");
        },
        other => panic!("unexpected result: {:?}", other.map(|t| t.len())),
    }
}
