use anyhow::{Context, Result};
use std::io::BufRead;

use crate::core::car::CarId;

/// The six entries of the main menu. Their numbers are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateCar,
    AddCar,
    RemoveCar,
    SearchCar,
    Showcase,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::CreateCar,
        MenuOption::AddCar,
        MenuOption::RemoveCar,
        MenuOption::SearchCar,
        MenuOption::Showcase,
        MenuOption::Exit,
    ];

    /// Maps a menu selection such as `"3"` to its option. Anything other than
    /// `1` through `6` yields `None`.
    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuOption::CreateCar),
            "2" => Some(MenuOption::AddCar),
            "3" => Some(MenuOption::RemoveCar),
            "4" => Some(MenuOption::SearchCar),
            "5" => Some(MenuOption::Showcase),
            "6" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuOption::CreateCar => 1,
            MenuOption::AddCar => 2,
            MenuOption::RemoveCar => 3,
            MenuOption::SearchCar => 4,
            MenuOption::Showcase => 5,
            MenuOption::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::CreateCar => "Create a car",
            MenuOption::AddCar => "Add a car to the garage",
            MenuOption::RemoveCar => "Remove a car from the garage",
            MenuOption::SearchCar => "Search for a car in the garage",
            MenuOption::Showcase => "Display all cars in the garage",
            MenuOption::Exit => "Exit the program",
        }
    }
}

/// What the user typed at the end of the create-car questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// `Y` or `y`
    Accept,
    /// `X`
    Cancel,
    /// Anything else asks the questions again.
    Retry,
}

impl Confirmation {
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "Y" | "y" => Confirmation::Accept,
            "X" => Confirmation::Cancel,
            _ => Confirmation::Retry,
        }
    }
}

/// Parses a car id typed at a prompt.
///
/// Surrounding whitespace is ignored. Negative, fractional, overflowing or
/// non-numeric text is rejected with a message suitable for the console.
pub fn parse_car_id(input: &str) -> Result<CarId> {
    let trimmed = input.trim();
    trimmed
        .parse::<CarId>()
        .with_context(|| format!("Invalid car id '{trimmed}': expected a non-negative whole number"))
}

/// Reads user input one line at a time.
pub struct LineReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Returns the next line with its terminator and surrounding whitespace
    /// removed, or `None` once the input is exhausted.
    ///
    /// Bytes that aren't valid UTF-8 become U+FFFD, so a garbled line reaches
    /// the menu as ordinary bad input instead of ending the session.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("Failed to read from input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }
}
