// Supported cities and their source files
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::path::{Path, PathBuf};

/// A city with trip data available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Name the user types to choose the city
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Fixed file name of the city's trip records
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<City> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|city| city.name() == name)
    }

    /// Location of the trip file inside `data_dir`
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
