//! Standalone bus route simulation module
//!
//! This module contains all the core simulation logic: the entity data model
//! (passengers, stops, buses), the network container, and the linear route
//! engine that advances the whole model one discrete time step at a time.
//! It has no dependency on any rendering code and can be driven from tests
//! or the console directly.

mod bus;
mod linear;
mod model;
mod network;
mod passenger;
mod stop;
mod types;

pub use bus::Bus;
pub use linear::LinearRouteModel;
pub use model::RouteModel;
pub use network::Network;
pub use passenger::Passenger;
pub use stop::BusStop;
pub use types::{Direction, Event, Position, DEFAULT_PATIENCE};
