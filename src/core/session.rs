use anyhow::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::builders::prompt::{Confirmation, LineReader, MenuOption, parse_car_id};
use crate::builders::reporter::ConsoleReporter;
use crate::core::car::{Car, CarId};
use crate::core::config::SessionSettings;
use crate::core::garage::Garage;

/// The states of the interactive menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuDisplayed,
    AwaitingCreateInputs,
    AwaitingAddChoice,
    AwaitingRemoveId,
    AwaitingSearchId,
    Exiting,
}

/// The three answers collected by the create-car questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarFields {
    pub make: String,
    pub model: String,
    pub colour: String,
}

impl CarFields {
    fn is_complete(&self) -> bool {
        !self.make.is_empty() && !self.model.is_empty() && !self.colour.is_empty()
    }
}

/// One run of the garage program.
///
/// The session owns all state for the run: the garage, the holding area of
/// cars created but not yet parked, and the console it talks through.
pub struct GarageSession<R: BufRead, W: Write> {
    garage: Garage,
    holding_area: HashMap<CarId, Car>,
    input: LineReader<R>,
    reporter: ConsoleReporter<W>,
    settings: SessionSettings,
}

impl<R: BufRead, W: Write> GarageSession<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings) -> Self {
        Self {
            garage: Garage::new(),
            holding_area: HashMap::new(),
            input: LineReader::new(input),
            reporter: ConsoleReporter::new(output),
            settings,
        }
    }

    /// Runs the menu loop until the user picks "Exit" or the input ends.
    pub fn run(&mut self) -> Result<()> {
        self.settings.apply_color();
        info!("garage session started");

        if self.settings.show_banner {
            self.reporter.banner()?;
        }

        let mut state = SessionState::MenuDisplayed;
        while state != SessionState::Exiting {
            let next = self.step(state)?;
            debug!(from = ?state, to = ?next, "session transition");
            state = next;
        }

        self.reporter.goodbye()?;
        info!(
            parked = self.garage.len(),
            holding = self.holding_area.len(),
            "garage session finished"
        );
        Ok(())
    }

    /// Handles a single state and returns the one to move to.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        match state {
            SessionState::MenuDisplayed => self.show_menu(),
            SessionState::AwaitingCreateInputs => self.create_into_holding_area(),
            SessionState::AwaitingAddChoice => self.add_to_garage(),
            SessionState::AwaitingRemoveId => self.remove_from_garage(),
            SessionState::AwaitingSearchId => self.search_garage(),
            SessionState::Exiting => Ok(SessionState::Exiting),
        }
    }

    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    pub fn holding_area(&self) -> &HashMap<CarId, Car> {
        &self.holding_area
    }

    /// Consumes the session and hands back the output writer.
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }

    fn show_menu(&mut self) -> Result<SessionState> {
        self.reporter.menu()?;

        let Some(selection) = self.input.read_line()? else {
            debug!("input closed at the menu");
            return Ok(SessionState::Exiting);
        };

        let next = match MenuOption::parse(&selection) {
            None => {
                self.reporter.invalid_selection()?;
                SessionState::MenuDisplayed
            }
            Some(MenuOption::CreateCar) => SessionState::AwaitingCreateInputs,
            Some(MenuOption::AddCar) => SessionState::AwaitingAddChoice,
            Some(MenuOption::RemoveCar) => SessionState::AwaitingRemoveId,
            Some(MenuOption::SearchCar) => SessionState::AwaitingSearchId,
            Some(MenuOption::Showcase) => {
                let cars = self.garage.showcase();
                self.reporter.showcase(&cars)?;
                SessionState::MenuDisplayed
            }
            Some(MenuOption::Exit) => SessionState::Exiting,
        };
        Ok(next)
    }

    /// Menu option 1: the new car goes to the holding area, not the garage.
    fn create_into_holding_area(&mut self) -> Result<SessionState> {
        if let Some(fields) = self.prompt_car_fields()?
            && let Some(car) = self.mint_car(fields)?
        {
            self.holding_area.insert(car.id(), car);
        }
        Ok(SessionState::MenuDisplayed)
    }

    /// Menu option 2: an empty line creates a car and parks it straight away,
    /// an id parks a car from the holding area.
    fn add_to_garage(&mut self) -> Result<SessionState> {
        self.reporter.ask_add_choice()?;
        let Some(choice) = self.input.read_line()? else {
            return Ok(SessionState::MenuDisplayed);
        };

        if choice.is_empty() {
            if let Some(fields) = self.prompt_car_fields()?
                && let Some(car) = self.mint_car(fields)?
            {
                let outcome = self.garage.add_car(car);
                self.reporter.add_outcome(&outcome)?;
            }
            return Ok(SessionState::MenuDisplayed);
        }

        match parse_car_id(&choice) {
            Ok(id) => match self.holding_area.get(&id) {
                Some(car) => {
                    let outcome = self.garage.add_car(car.clone());
                    self.reporter.add_outcome(&outcome)?;
                }
                None => {
                    debug!(id, "no such car in the holding area");
                    self.reporter.unknown_car()?;
                }
            },
            Err(e) => {
                debug!(input = %choice, "malformed car id");
                self.reporter.malformed_input(&e)?;
            }
        }
        Ok(SessionState::MenuDisplayed)
    }

    fn remove_from_garage(&mut self) -> Result<SessionState> {
        self.reporter.ask_remove_id()?;
        if let Some(id) = self.read_car_id()? {
            let removed = self.garage.remove_car(id);
            self.reporter.car_removed(removed.as_ref())?;
        }
        Ok(SessionState::MenuDisplayed)
    }

    fn search_garage(&mut self) -> Result<SessionState> {
        self.reporter.ask_search_id()?;
        if let Some(id) = self.read_car_id()? {
            let found = self.garage.search_car(id);
            self.reporter.car_found(found)?;
        }
        Ok(SessionState::MenuDisplayed)
    }

    /// Reads an id typed at a prompt. Malformed input is reported and yields
    /// `None`, as does the end of input.
    fn read_car_id(&mut self) -> Result<Option<CarId>> {
        let Some(line) = self.input.read_line()? else {
            return Ok(None);
        };

        match parse_car_id(&line) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                debug!(input = %line, "malformed car id");
                self.reporter.malformed_input(&e)?;
                Ok(None)
            }
        }
    }

    /// Creates a car from the collected answers and announces it. Running out
    /// of ids is reported to the user and yields `None`.
    fn mint_car(&mut self, fields: CarFields) -> Result<Option<Car>> {
        let minted = self
            .garage
            .create_car(fields.make, fields.model, fields.colour, &self.holding_area);
        match &minted {
            Some(car) => self.reporter.car_created(car)?,
            None => self.reporter.ids_exhausted()?,
        }
        Ok(minted)
    }

    /// The create-car questions. Repeats until the user confirms with `Y`/`y`
    /// or cancels with `X`; the end of input counts as cancelling.
    fn prompt_car_fields(&mut self) -> Result<Option<CarFields>> {
        loop {
            self.reporter.ask_make()?;
            let Some(make) = self.input.read_line()? else {
                return Ok(None);
            };
            self.reporter.ask_model()?;
            let Some(model) = self.input.read_line()? else {
                return Ok(None);
            };
            self.reporter.ask_colour()?;
            let Some(colour) = self.input.read_line()? else {
                return Ok(None);
            };

            self.reporter.ask_confirmation(&make, &model, &colour)?;
            let Some(token) = self.input.read_line()? else {
                return Ok(None);
            };

            match Confirmation::parse(&token) {
                Confirmation::Accept => {
                    let fields = CarFields { make, model, colour };
                    if fields.is_complete() {
                        return Ok(Some(fields));
                    }
                    self.reporter.missing_fields()?;
                }
                Confirmation::Cancel => {
                    self.reporter.creation_cancelled()?;
                    return Ok(None);
                }
                Confirmation::Retry => debug!("car creation restarted"),
            }
        }
    }
}
