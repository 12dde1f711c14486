//! Bus entity

use anyhow::{ensure, Result};

use super::passenger::Passenger;
use super::types::{Direction, Position};

/// A bus traversing the linear route
#[derive(Debug, Clone)]
pub struct Bus {
    pub name: String,
    pub position: Position,
    pub direction: Direction,
    /// Configured speed in route units per tick; any value <= 0 means the
    /// engine substitutes a fresh random speed in [1, max_speed] every tick
    pub speed: i64,
    /// Upper bound for randomized per-tick speeds, must be >= 1
    pub max_speed: i64,
    /// Seat count; a negative value means unlimited
    pub capacity: i64,
    /// Onboard passengers; order is preserved for deterministic events
    pub passengers: Vec<Passenger>,
}

impl Bus {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        direction: Direction,
        speed: i64,
        max_speed: i64,
        capacity: i64,
        passengers: Vec<Passenger>,
    ) -> Result<Self> {
        let name = name.into();
        ensure!(
            max_speed >= 1,
            "bus {} max_speed should be at least 1, got {}",
            name,
            max_speed
        );
        if capacity >= 0 {
            ensure!(
                passengers.len() as i64 <= capacity,
                "bus {} starts with {} passengers but capacity is {}",
                name,
                passengers.len(),
                capacity
            );
        }
        Ok(Self {
            name,
            position,
            direction,
            speed,
            max_speed,
            capacity,
            passengers,
        })
    }
}
