use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::car::{Car, CarId};

/// The result of trying to park a car in the garage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The car was inserted under its own id.
    Added(Car),
    /// A car with this id is already parked; the garage was left untouched.
    Duplicate(CarId),
}

/// Finds the next id to hand out.
///
/// Scans upward from `mark` and returns the first value not present in
/// `reserved`, together with the new high-water mark. The mark is left on the
/// chosen id itself, so the next scan resumes from there instead of zero.
/// Returns `None` when every id from `mark` up to `CarId::MAX` is reserved.
pub fn next_free_id(mark: CarId, reserved: &HashSet<CarId>) -> Option<(CarId, CarId)> {
    let mut id = mark;
    while reserved.contains(&id) {
        id = id.checked_add(1)?;
    }
    Some((id, id))
}

/// The garage owns every car currently parked in it, keyed by car id.
///
/// It also owns the id counter. Every id it mints is remembered, so an id is
/// never handed out twice in the same run, even after the car is removed.
#[derive(Debug, Default)]
pub struct Garage {
    cars: HashMap<CarId, Car>,
    mark: CarId,
    issued: HashSet<CarId>,
}

impl Garage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a new car whose id is free among `known_cars`, the garage itself
    /// and every id previously issued.
    ///
    /// `known_cars` is not modified; registering the returned car somewhere is
    /// up to the caller. `None` means the id space is used up.
    pub fn create_car(
        &mut self,
        make: impl Into<String>,
        model: impl Into<String>,
        colour: impl Into<String>,
        known_cars: &HashMap<CarId, Car>,
    ) -> Option<Car> {
        let reserved: HashSet<CarId> = known_cars
            .keys()
            .chain(self.cars.keys())
            .chain(self.issued.iter())
            .copied()
            .collect();

        let Some((id, mark)) = next_free_id(self.mark, &reserved) else {
            debug!(mark = self.mark, "no free car id left");
            return None;
        };
        self.mark = mark;
        self.issued.insert(id);

        let car = Car::new(id, make, model, colour);
        debug!(id, car = %car, "minted car");
        Some(car)
    }

    /// Parks `car` under its own id unless that id is already taken.
    pub fn add_car(&mut self, car: Car) -> AddOutcome {
        let id = car.id();
        if self.cars.contains_key(&id) {
            debug!(id, "car already parked");
            return AddOutcome::Duplicate(id);
        }

        self.cars.insert(id, car.clone());
        debug!(id, total = self.cars.len(), "parked car");
        AddOutcome::Added(car)
    }

    /// Removes and returns the car with `id`, or `None` when it isn't parked.
    pub fn remove_car(&mut self, id: CarId) -> Option<Car> {
        let removed = self.cars.remove(&id);
        debug!(id, found = removed.is_some(), "remove car");
        removed
    }

    pub fn search_car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(&id)
    }

    /// Every parked car, ordered by id.
    pub fn showcase(&self) -> Vec<&Car> {
        let mut cars: Vec<&Car> = self.cars.values().collect();
        cars.sort_by_key(|car| car.id());
        cars
    }

    pub fn contains(&self, id: CarId) -> bool {
        self.cars.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
