use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

use crate::builders::prompt::MenuOption;
use crate::core::car::Car;
use crate::core::garage::AddOutcome;

const BANNER_RULE: &str = "=-=-=-=-=-=-=--=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-==-=";
const MENU_RULE: &str = "#######################################";
const SHOWCASE_RULE: &str = "-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-";
const ADDED_RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Writes every user-facing line of a garage session: the menu, prompts and
/// the outcome of each garage operation.
///
/// The writer is usually stdout, but any `Write` works, which is how the
/// tests capture a whole session.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}").context("Failed to write to output")
    }

    fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }

    pub fn banner(&mut self) -> Result<()> {
        self.line(BANNER_RULE.cyan())?;
        self.line("=-=-=-=-=-=-=-WELCOME TO THE GARAGE-=-=-=-=-=-=-=-=".cyan().bold())?;
        self.line(BANNER_RULE.cyan())?;
        self.blank()
    }

    pub fn menu(&mut self) -> Result<()> {
        self.blank()?;
        self.line(MENU_RULE.blue())?;
        self.line("# What would you like to do?")?;
        self.line("#")?;
        for option in MenuOption::ALL {
            self.line(format!("# {} - {}", option.number(), option.label()))?;
        }
        self.line("#")?;
        self.line(MENU_RULE.blue())?;
        self.blank()?;
        self.flush()
    }

    pub fn invalid_selection(&mut self) -> Result<()> {
        self.blank()?;
        self.line("PLEASE SELECT A VALID MENU OPTION".red().bold())?;
        self.blank()
    }

    pub fn ask_make(&mut self) -> Result<()> {
        self.line("What is the make of the car?")?;
        self.flush()
    }

    pub fn ask_model(&mut self) -> Result<()> {
        self.line("What is the model of the car?")?;
        self.flush()
    }

    pub fn ask_colour(&mut self) -> Result<()> {
        self.line("What is the colour of the car?")?;
        self.flush()
    }

    pub fn ask_confirmation(&mut self, make: &str, model: &str, colour: &str) -> Result<()> {
        self.line(format!(
            "Please confirm you want to create a {colour} {make} {model} by typing 'Y'"
        ))?;
        self.line("You can cancel car creation by typing 'X', or any other key to start again")?;
        self.flush()
    }

    pub fn missing_fields(&mut self) -> Result<()> {
        self.line("make, model and colour are all required, please try again".yellow())
    }

    pub fn creation_cancelled(&mut self) -> Result<()> {
        self.line("Car creation cancelled")
    }

    pub fn car_created(&mut self, car: &Car) -> Result<()> {
        self.blank()?;
        self.line(format!("{} {car}", "Created a new car:".green()))
    }

    pub fn ids_exhausted(&mut self) -> Result<()> {
        self.line("Sorry, there are no car ids left to hand out".red())
    }

    pub fn ask_add_choice(&mut self) -> Result<()> {
        self.line("Press 'Enter' to add a new car, or enter the id of an existing car")?;
        self.flush()
    }

    pub fn add_outcome(&mut self, outcome: &AddOutcome) -> Result<()> {
        self.blank()?;
        match outcome {
            AddOutcome::Added(car) => {
                self.line(format!(
                    "{} {car}",
                    "Successfully added the car to the garage:".green()
                ))?;
                self.line(ADDED_RULE)?;
                self.blank()
            }
            AddOutcome::Duplicate(_) => self.line("Car is already in the garage".yellow()),
        }
    }

    pub fn unknown_car(&mut self) -> Result<()> {
        self.line("Sorry, unable to find a car with that id".yellow())
    }

    pub fn ask_remove_id(&mut self) -> Result<()> {
        self.line("Enter the id of the car you wish to remove from the garage")?;
        self.flush()
    }

    pub fn car_removed(&mut self, removed: Option<&Car>) -> Result<()> {
        self.blank()?;
        match removed {
            Some(car) => self.line(format!("Removed the following car from the garage: {car}")),
            None => {
                self.line("Sorry, no car matching that id could be found.".yellow())?;
                self.line("Unable to remove a car that wasn't found")?;
                self.blank()
            }
        }
    }

    pub fn ask_search_id(&mut self) -> Result<()> {
        self.line("Enter the id of the car you wish to find in the garage")?;
        self.flush()
    }

    pub fn car_found(&mut self, found: Option<&Car>) -> Result<()> {
        self.blank()?;
        match found {
            Some(car) => self.line(format!("Found a car: {car}")),
            None => self.line("Sorry, no car matching that id could be found".yellow()),
        }
    }

    pub fn showcase(&mut self, cars: &[&Car]) -> Result<()> {
        if cars.is_empty() {
            self.line("There are no cars currently in the garage")?;
            return self.blank();
        }

        self.line(format!("Showing all {} cars in the garage", cars.len()))?;
        self.blank()?;
        self.line(SHOWCASE_RULE)?;
        for car in cars {
            self.line(car)?;
        }
        self.line(SHOWCASE_RULE)?;
        self.blank()
    }

    pub fn malformed_input(&mut self, error: &anyhow::Error) -> Result<()> {
        self.line(format!("{} {error}", "⚠️ ".yellow()))
    }

    pub fn goodbye(&mut self) -> Result<()> {
        self.line("Goodbye!")?;
        self.flush()
    }
}
