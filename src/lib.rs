// Bikeshare Explorer
// Author: Gabriel Demetrios Lafis

//! # Bikeshare Explorer
//!
//! Interactive statistics over US bikeshare trip records.
//!
//! ## Features
//!
//! - Loading trip files for Chicago, New York City and Washington
//! - Month and day-of-week filters
//! - Most common travel times, stations and routes
//! - Trip duration aggregates and rider demographics
//! - A paginated raw data browser
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use bikeshare_explorer::{
//!     bikeshare::{load_trips, City, DayFilter, Filters, Month, MonthFilter},
//!     report::Report,
//! };
//!
//! let filters = Filters::new(
//!     City::Chicago,
//!     MonthFilter::Only(Month::March),
//!     DayFilter::All,
//! );
//! let trips = load_trips(Path::new("."), &filters).unwrap();
//!
//! Report::Time.render(&mut std::io::stdout(), &trips).unwrap();
//! ```

pub mod bikeshare;
pub mod data;
pub mod processing;
pub mod report;
pub mod shell;
pub mod utils;

// Re-export main types
pub use bikeshare::{load_trips, City, Filters};
pub use data::{DataSet, DataType, Field, Row, Schema, Value};
pub use processing::Pipeline;
pub use shell::Shell;
pub use utils::Config;
