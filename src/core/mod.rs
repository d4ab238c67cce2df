// This file is the module declaration file for the `core` module.
// It declares the submodules that make up the garage domain and exposes
// them to the rest of the crate.

// `car` module:
// The `Car` record and the `CarId` type. A car's id is fixed when it is
// constructed; make, model and colour can change afterwards.
pub mod car;

// `config` module:
// `SessionSettings`, the knobs that shape console output (banner, colors,
// verbose logging). They never change how the garage itself behaves.
pub mod config;

// `garage` module:
// The `Garage` keyed collection plus id minting. `next_free_id` is the pure
// scan used to pick an id that nobody else holds.
pub mod garage;

// `session` module:
// The interactive menu loop as an explicit state machine. A `GarageSession`
// owns the garage, the holding area of not-yet-parked cars and the console.
pub mod session;
