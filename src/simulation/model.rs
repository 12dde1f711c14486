//! Simulation behavior capability

use super::types::Event;

/// A simulation strategy driving a route network through discrete time
///
/// The container holds the data; implementors of this trait hold the update
/// rules. Each call to [`update`](RouteModel::update) advances the model by
/// exactly one time unit and returns the events of that tick in emission
/// order.
pub trait RouteModel {
    /// Derive the events implied by the initial state and reset internal
    /// counters
    fn init(&mut self) -> Vec<Event>;

    /// Advance the model one time step, returning the tick's events
    fn update(&mut self) -> Vec<Event>;
}
