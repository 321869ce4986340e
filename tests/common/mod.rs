// Shared fixtures for integration tests
// Author: Gabriel Demetrios Lafis

use std::fs;

use tempfile::TempDir;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Clark St,Subscriber,Male,1989.0
1,2017-01-02 17:15:00,2017-01-02 17:30:00,900,Canal St,Clark St,Subscriber,Female,1992.0
2,2017-03-06 08:00:00,2017-03-06 08:10:00,600,Clark St,Canal St,Customer,,
3,2017-06-23 17:45:00,2017-06-23 18:00:00,900,Canal St,State St,Subscriber,Male,unknown
";

/// Sunday trips with no readable durations or user types
pub const SPARSE_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 09:07:57,2017-01-01 09:20:53,,Canal St,Clark St,
1,2017-01-08 17:15:00,2017-01-08 17:30:00,n/a,Clark St,Canal St,
";

/// Washington-style file with `rows` trips and no demographics
pub fn washington_csv(rows: usize) -> String {
    let mut csv = String::from(",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n");
    for i in 0..rows {
        csv.push_str(&format!(
            "{i},2017-01-{day:02} 08:00:00,2017-01-{day:02} 08:10:00,{secs}.5,Station {i},Station {next},Subscriber\n",
            i = i,
            day = i % 28 + 1,
            secs = 60 * (i + 1),
            next = i + 1,
        ));
    }
    csv
}

/// Temporary data directory holding the given city files
pub fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}
