// Interactive shell driving filter selection and the report menu
// Author: Gabriel Demetrios Lafis

mod prompt;

pub use prompt::*;

use std::io::Write;
use std::ops::ControlFlow;
use std::process::Command;

use log::{debug, info};

use crate::bikeshare::{
    day_name, load_trips, parse_day, City, DayFilter, Filters, Month, MonthFilter, WEEKDAYS,
};
use crate::data::DataSet;
use crate::report::{filters_banner, rule, RawDataBrowser, Report, NO_DATA_MESSAGE};
use crate::utils::{parse_page_size, validate_choice, AppError, AppResult, Config};

/// Farewell printed on exit
pub const FAREWELL: &str = "Bye!";

/// Menu entries as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show(Report),
    RawData,
    Restart,
    Exit,
}

impl MenuChoice {
    pub const KEYS: [&'static str; 7] = ["1", "2", "3", "4", "5", "9", "0"];

    pub fn from_key(key: &str) -> Option<MenuChoice> {
        match key.trim() {
            "1" => Some(MenuChoice::Show(Report::Time)),
            "2" => Some(MenuChoice::Show(Report::Station)),
            "3" => Some(MenuChoice::Show(Report::Duration)),
            "4" => Some(MenuChoice::Show(Report::User)),
            "5" => Some(MenuChoice::RawData),
            "9" => Some(MenuChoice::Restart),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether an answer asks to leave the program
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input == "0"
}

/// A loaded table together with the filters that produced it
struct Session {
    filters: Filters,
    trips: DataSet,
}

enum State {
    SelectFilters,
    SelectReport(Box<Session>),
    Terminated,
}

/// The interactive loop: choose filters, then reports, until the user exits
pub struct Shell<P: Prompt, W: Write> {
    prompt: P,
    out: W,
    config: Config,
}

impl<P: Prompt, W: Write> Shell<P, W> {
    pub fn new(prompt: P, out: W, config: Config) -> Self {
        Shell { prompt, out, config }
    }

    /// Consume the shell, handing back its prompt and output
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Run until the user exits. Load failures end the loop with an error.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = State::SelectFilters;

        loop {
            state = match state {
                State::SelectFilters => match self.select_filters()? {
                    ControlFlow::Continue(filters) => {
                        let trips = load_trips(&self.config.data.dir, &filters)?;
                        State::SelectReport(Box::new(Session { filters, trips }))
                    },
                    ControlFlow::Break(()) => State::Terminated,
                },
                State::SelectReport(session) => match self.select_report(&session)? {
                    ControlFlow::Continue(true) => State::SelectReport(session),
                    ControlFlow::Continue(false) => State::SelectFilters,
                    ControlFlow::Break(()) => State::Terminated,
                },
                State::Terminated => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    self.out.flush()?;
                    info!("Session ended by user");
                    return Ok(());
                },
            };
        }
    }

    fn select_filters(&mut self) -> AppResult<ControlFlow<(), Filters>> {
        self.clear_screen();
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.out, "If you want to quit, just type 'exit' anytime\n\n")?;

        let city_names: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
        let Some(city) = self.ask("city", &city_names, false)? else {
            return Ok(ControlFlow::Break(()));
        };

        let month_names: Vec<&str> = Month::ALL.iter().map(|m| m.name()).collect();
        let Some(month) = self.ask("month", &month_names, true)? else {
            return Ok(ControlFlow::Break(()));
        };

        let day_names: Vec<String> = WEEKDAYS.iter().map(|d| day_name(*d).to_lowercase()).collect();
        let day_names: Vec<&str> = day_names.iter().map(String::as_str).collect();
        let Some(day) = self.ask("day of week", &day_names, true)? else {
            return Ok(ControlFlow::Break(()));
        };

        writeln!(self.out, "{}", rule('-', 40))?;

        let city = City::from_name(&city)
            .ok_or_else(|| AppError::Input(format!("Unknown city '{}'", city)))?;
        let filters = Filters::new(
            city,
            Month::from_name(&month).map_or(MonthFilter::All, MonthFilter::Only),
            parse_day(&day).map_or(DayFilter::All, DayFilter::Only),
        );
        debug!("Filters chosen: {}", filters);

        Ok(ControlFlow::Continue(filters))
    }

    /// Show the menu and run one choice. `Continue(false)` asks for new filters.
    fn select_report(&mut self, session: &Session) -> AppResult<ControlFlow<(), bool>> {
        self.show_menu()?;

        let Some(key) = self.ask("menu", &MenuChoice::KEYS, false)? else {
            return Ok(ControlFlow::Break(()));
        };
        self.clear_screen();

        match MenuChoice::from_key(&key) {
            Some(MenuChoice::Show(report)) => {
                filters_banner(&mut self.out, &session.filters)?;
                report.render(&mut self.out, &session.trips)?;
                Ok(ControlFlow::Continue(true))
            },
            Some(MenuChoice::RawData) => match self.browse(&session.trips)? {
                ControlFlow::Continue(()) => Ok(ControlFlow::Continue(true)),
                ControlFlow::Break(()) => Ok(ControlFlow::Break(())),
            },
            Some(MenuChoice::Restart) => Ok(ControlFlow::Continue(false)),
            Some(MenuChoice::Exit) | None => Ok(ControlFlow::Break(())),
        }
    }

    fn show_menu(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", rule('-', 40))?;
        writeln!(
            self.out,
            "To analyse the data, please choose a menu number, or type 9 to restart or 0 to exit"
        )?;
        writeln!(self.out, "1 - Time Stats")?;
        writeln!(self.out, "2 - Station Stats")?;
        writeln!(self.out, "3 - Trip Duration Stats")?;
        writeln!(self.out, "4 - User Stats")?;
        writeln!(self.out, "5 - Raw Data")?;
        writeln!(self.out, "9 - Restart")?;
        writeln!(self.out, "0 - Exit")?;
        writeln!(self.out, "{}", rule('-', 40))?;
        Ok(())
    }

    /// Page through the raw rows while the user keeps answering "yes"
    fn browse(&mut self, trips: &DataSet) -> AppResult<ControlFlow<()>> {
        let browser_config = self.config.browser.clone();

        let Some(answer) = self.read_answer(&format!(
            "\nHow many rows do you want to see? (min: {}, max: {}) (Default: {}) ",
            browser_config.min_page_size, browser_config.max_page_size, browser_config.default_page_size
        ))?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let page_size = parse_page_size(
            &answer,
            browser_config.default_page_size,
            browser_config.min_page_size,
            browser_config.max_page_size,
        );
        let browser = RawDataBrowser::new(trips, page_size);

        if browser.total_rows() == 0 {
            writeln!(self.out, "\n{}", NO_DATA_MESSAGE)?;
            return Ok(ControlFlow::Continue(()));
        }

        for page in browser.pages() {
            let last = page.end >= browser.total_rows();
            browser.render_page(&mut self.out, page)?;
            if last {
                break;
            }

            let Some(answer) = self.read_answer(&format!(
                "\nDo you want to see the next {} rows? (yes/no): ",
                browser.page_size()
            ))?
            else {
                return Ok(ControlFlow::Break(()));
            };

            if answer.trim().to_lowercase() != "yes" {
                break;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Read one answer; `None` when the user asked to exit or interrupted
    fn read_answer(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.out.flush()?;
        match self.prompt.read_line(prompt)? {
            PromptInput::Line(line) if is_exit_command(&line) => Ok(None),
            PromptInput::Line(line) => Ok(Some(line)),
            PromptInput::Interrupted => Ok(None),
        }
    }

    /// Ask until the answer is one of `accepted` (or "all" when allowed)
    fn ask(&mut self, label: &str, accepted: &[&str], allow_all: bool) -> AppResult<Option<String>> {
        let all_hint = if allow_all { " or type 'all'" } else { "" };
        let choices = format!("[{}]", accepted.join(", "));

        loop {
            let Some(answer) = self.read_answer(&format!("Choose a {} ({}{}): ", label, choices, all_hint))? else {
                return Ok(None);
            };

            if let Some(choice) = validate_choice(&answer, accepted, allow_all) {
                return Ok(Some(choice));
            }

            writeln!(
                self.out,
                "Invalid {} name '{}'. Please choose one of the following: {}{}",
                label,
                answer.trim().to_lowercase(),
                choices,
                all_hint
            )?;
        }
    }

    fn clear_screen(&mut self) {
        if !self.config.terminal.clear_screen {
            return;
        }

        let _ = self.out.flush();
        let status = if cfg!(windows) {
            Command::new("cmd").args(["/C", "cls"]).status()
        } else {
            Command::new("clear").status()
        };

        if let Err(err) = status {
            debug!("Could not clear the terminal: {}", err);
        }
    }
}
