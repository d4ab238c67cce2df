//! An interactive console garage.
//!
//! Cars are created into a holding area, parked in the garage, looked up,
//! listed and removed through a numbered menu read from standard input.
pub mod builders;
pub mod core;
pub mod utils;

#[cfg(test)]
mod tests;
