// Month and weekday names used by the filters
// Author: Gabriel Demetrios Lafis

use std::fmt;

use chrono::Weekday;

/// Months covered by the trip data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
}

const MONTH_NAMES: [(Month, &str); 6] = [
    (Month::January, "january"),
    (Month::February, "february"),
    (Month::March, "march"),
    (Month::April, "april"),
    (Month::May, "may"),
    (Month::June, "june"),
];

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar number, January is 1
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Lower-case name as typed by the user
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.number() as usize - 1].1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        Self::ALL.get((number as usize).checked_sub(1)?).copied()
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Month> {
        let name = name.trim().to_lowercase();
        MONTH_NAMES
            .iter()
            .find(|(_, month_name)| *month_name == name)
            .map(|(month, _)| *month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&title_case(self.name()))
    }
}

/// Days in the order they are offered to the user
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Capitalized English name of a weekday, e.g. "Monday"
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive lookup by full day name
pub fn parse_day(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAYS
        .into_iter()
        .find(|day| day_name(*day).eq_ignore_ascii_case(name))
}

/// Upper-case the first letter of every word
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Month restriction chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

/// Day-of-week restriction chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(&day_name(*day).to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_mapping_both_ways() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
            assert_eq!(Month::from_name(month.name()), Some(month));
        }
        assert_eq!(Month::from_name("March").map(|m| m.number()), Some(3));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(7), None);
        assert_eq!(Month::June.to_string(), "June");
    }

    #[test]
    fn test_day_names() {
        assert_eq!(parse_day("wednesday"), Some(Weekday::Wed));
        assert_eq!(parse_day("SUNDAY"), Some(Weekday::Sun));
        assert_eq!(parse_day("wed"), None);
        assert_eq!(day_name(Weekday::Sat), "Saturday");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case("mONDAY"), "Monday");
    }
}
