use std::fmt;

/// The identifier handed out to every car. Ids are minted by the `Garage`
/// and never change once a `Car` has been constructed.
pub type CarId = u32;

/// A single car record.
///
/// The `id` is fixed at construction and has no setter. `make`, `model` and
/// `colour` can be changed freely afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    make: String,
    model: String,
    colour: String,
}

impl Car {
    /// Constructs a new `Car` with a fixed id.
    pub fn new(
        id: CarId,
        make: impl Into<String>,
        model: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            id,
            make: make.into(),
            model: model.into(),
            colour: colour.into(),
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_colour(&mut self, colour: impl Into<String>) {
        self.colour = colour.into();
    }
}

/// Renders a car as `[id] - colour make model`, the format used in every
/// console message that mentions a car.
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] - {} {} {}",
            self.id, self.colour, self.make, self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let car = Car::new(0, "Toyota", "Corolla", "Red");
        assert_eq!(car.to_string(), "[0] - Red Toyota Corolla");
    }

    #[test]
    fn test_setters_keep_id() {
        let mut car = Car::new(7, "Ford", "Focus", "Blue");
        car.set_make("Honda");
        car.set_model("Civic");
        car.set_colour("Green");

        assert_eq!(car.id(), 7);
        assert_eq!(car.make(), "Honda");
        assert_eq!(car.model(), "Civic");
        assert_eq!(car.colour(), "Green");
        assert_eq!(car.to_string(), "[7] - Green Honda Civic");
    }

    #[test]
    fn test_degenerate_empty_fields() {
        let car = Car::new(3, "", "", "");
        assert_eq!(car.to_string(), "[3] -   ");
    }
}
