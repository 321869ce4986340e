// Interactive shell tests driven by scripted answers
// Author: Gabriel Demetrios Lafis

mod common;

use std::path::Path;

use bikeshare_explorer::{
    shell::{ScriptedPrompt, Shell, FAREWELL},
    utils::{AppResult, Config},
};

use common::{data_dir, washington_csv, CHICAGO_CSV, SPARSE_CSV};

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.data.dir = dir.to_path_buf();
    config.terminal.clear_screen = false;
    config
}

/// Run a session and return its result, the transcript and the prompts shown
fn run_session(dir: &Path, answers: &[&str]) -> (AppResult<()>, String, Vec<String>) {
    let mut shell = Shell::new(ScriptedPrompt::new(answers.iter().copied()), Vec::new(), config_for(dir));
    let result = shell.run();
    let (prompt, out) = shell.into_parts();
    (result, String::from_utf8(out).unwrap(), prompt.shown)
}

#[test]
fn test_exit_at_first_prompt() {
    let dir = data_dir(&[]);
    for exit in ["exit", "EXIT", "0"] {
        let (result, text, shown) = run_session(dir.path(), &[exit]);
        assert!(result.is_ok());
        assert!(text.trim_end().ends_with(FAREWELL));
        assert_eq!(shown.len(), 1);
    }
}

#[test]
fn test_interrupt_behaves_like_exit() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let (result, text, _) = run_session(dir.path(), &["chicago"]);

    assert!(result.is_ok());
    assert!(text.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_invalid_input_reprompts() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let (result, text, shown) = run_session(dir.path(), &["boston", "Chicago", "july", "all", "all", "exit"]);

    assert!(result.is_ok());
    assert!(text.contains("Invalid city name 'boston'. Please choose one of the following: [chicago, new york city, washington]"));
    assert!(text.contains("Invalid month name 'july'."));
    assert_eq!(shown[0], shown[1]);
    assert!(shown[2].starts_with("Choose a month ("));
    assert!(shown[2].contains("or type 'all'"));
}

#[test]
fn test_report_from_menu() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV)]);
    let (result, text, _) = run_session(dir.path(), &["chicago", "all", "monday", "1", "0"]);

    assert!(result.is_ok());
    assert!(text.contains("Chosen Filters:"));
    assert!(text.contains("Day of Week: monday"));
    assert!(text.contains("The most common day of week is Monday. Count: 2 (100.00%)"));
    assert!(text.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_restart_loads_another_city() {
    let dir = data_dir(&[("chicago.csv", CHICAGO_CSV), ("washington.csv", &washington_csv(4))]);
    let (result, text, _) = run_session(
        dir.path(),
        &["chicago", "all", "all", "9", "washington", "all", "all", "4", "exit"],
    );

    assert!(result.is_ok());
    assert_eq!(text.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
    assert!(text.contains("City: washington"));
    assert!(!text.contains("Gender"));
}

#[test]
fn test_raw_data_pages_until_exhausted() {
    let dir = data_dir(&[("washington.csv", &washington_csv(12))]);
    let (result, text, shown) = run_session(
        dir.path(),
        &["washington", "all", "all", "5", "5", "yes", "YES", "0"],
    );

    assert!(result.is_ok());
    assert!(text.contains("Showing 5 rows (0:5) of 12"));
    assert!(text.contains("Showing 5 rows (5:10) of 12"));
    assert!(text.contains("Showing 2 rows (10:12) of 12"));
    assert!(!text.contains("month"));
    assert_eq!(shown.iter().filter(|p| p.contains("Do you want to see the next 5 rows?")).count(), 2);
}

#[test]
fn test_raw_data_stops_when_declined() {
    let dir = data_dir(&[("washington.csv", &washington_csv(12))]);
    let (result, text, shown) = run_session(
        dir.path(),
        &["washington", "all", "all", "5", "5", "no", "0"],
    );

    assert!(result.is_ok());
    assert!(text.contains("Showing 5 rows (0:5) of 12"));
    assert!(!text.contains("(5:10)"));
    // back at the menu after declining
    assert!(shown.last().unwrap().starts_with("Choose a menu"));
}

#[test]
fn test_raw_data_page_size_falls_back_to_default() {
    let dir = data_dir(&[("washington.csv", &washington_csv(12))]);
    let (_, text, _) = run_session(dir.path(), &["washington", "all", "all", "5", "lots", "no", "0"]);

    assert!(text.contains("Showing 5 rows (0:5) of 12"));
}

#[test]
fn test_exit_while_browsing() {
    let dir = data_dir(&[("washington.csv", &washington_csv(12))]);
    let (result, text, shown) = run_session(dir.path(), &["washington", "all", "all", "5", "3", "exit"]);

    assert!(result.is_ok());
    assert!(text.contains("Showing 3 rows (0:3) of 12"));
    assert!(text.trim_end().ends_with(FAREWELL));
    assert_eq!(shown.len(), 6);
}

#[test]
fn test_leaving_mid_session() {
    let dir = data_dir(&[("washington.csv", &washington_csv(12))]);
    let scripts: [(&[&str], usize); 4] = [
        // exit and interrupt at the menu
        (&["washington", "all", "all", "exit"], 4),
        (&["washington", "all", "all"], 4),
        // exit and interrupt at the page size prompt
        (&["washington", "all", "all", "5", "0"], 5),
        (&["washington", "all", "all", "5"], 5),
    ];

    for (script, prompts) in scripts {
        let (result, text, shown) = run_session(dir.path(), script);
        assert!(result.is_ok(), "{:?}", script);
        assert!(text.trim_end().ends_with(FAREWELL));
        assert!(!text.contains("Showing"));
        assert_eq!(shown.len(), prompts);
    }
}

#[test]
fn test_report_without_usable_values_returns_to_menu() {
    let dir = data_dir(&[("washington.csv", SPARSE_CSV)]);
    let (result, text, _) = run_session(dir.path(), &["washington", "all", "sunday", "3", "1", "0"]);

    assert!(result.is_ok());
    assert!(text.contains("No data for travel time."));
    assert!(text.contains("The most common month is January. Count: 2 (100.00%)"));
    assert!(text.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_missing_city_file_is_fatal() {
    let dir = data_dir(&[]);
    let (result, text, _) = run_session(dir.path(), &["new york city", "all", "all"]);

    let err = result.unwrap_err();
    assert!(err.is_data_not_found());
    assert!(!text.contains(FAREWELL));
}
