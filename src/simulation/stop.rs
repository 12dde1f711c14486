//! Bus stop entity

use std::collections::VecDeque;

use anyhow::{ensure, Result};

use super::passenger::Passenger;
use super::types::Position;

/// A bus stop along the route with a FIFO queue of waiting passengers
///
/// Queue order is arrival order and doubles as boarding priority: the
/// earliest-arrived passenger boards first when a bus has limited room.
#[derive(Debug, Clone)]
pub struct BusStop {
    pub name: String,
    pub position: Position,
    pub passengers: VecDeque<Passenger>,
}

impl BusStop {
    /// Create a stop holding the given initial queue
    ///
    /// Every queued passenger must name this stop as their source.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        passengers: Vec<Passenger>,
    ) -> Result<Self> {
        let name = name.into();
        for passenger in &passengers {
            ensure!(
                passenger.source == name,
                "passenger {} is queued at {} but starts from {}",
                passenger.name,
                name,
                passenger.source
            );
        }
        Ok(Self {
            name,
            position,
            passengers: passengers.into(),
        })
    }
}
