//! Core types for the bus route simulation
//!
//! These are standalone types shared by the entities and the engine.

use std::fmt;

use anyhow::{bail, Result};

/// Patience assigned to passengers spawned by the engine
pub const DEFAULT_PATIENCE: u32 = 10;

/// A 2D integer position on the route
///
/// The y component is conventionally 0 on a linear route; buses only ever
/// move along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Direction of travel along the route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moving left to right (+1)
    Right,
    /// Moving right to left (-1)
    Left,
}

impl Direction {
    /// Convert an external +1/-1 delta into a direction
    ///
    /// Any other value is a construction error.
    pub fn from_delta(delta: i64) -> Result<Self> {
        match delta {
            1 => Ok(Direction::Right),
            -1 => Ok(Direction::Left),
            other => bail!("direction should be 1 or -1, got {}", other),
        }
    }

    /// The per-step x displacement sign for this direction
    pub fn delta(self) -> i64 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

/// A domain event emitted by the engine
///
/// Events carry entity names, not references; the event log outlives the
/// entities it mentions (an alighted passenger only survives in the log).
/// `Boards::location` is the bus name for passengers already aboard at
/// `init` time and the stop name when boarding during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A passenger joins (or is found waiting in) a stop's queue
    Waits { passenger: String, stop: String },
    /// A passenger boards a bus
    Boards { passenger: String, location: String },
    /// A passenger gets off at their destination
    Alights { passenger: String, stop: String },
    /// A bus stops at a bus stop
    Stops { bus: String, stop: String },
    /// A bus reverses direction at a route boundary
    Turns { bus: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Waits { passenger, stop } => write!(f, "waits({}, {})", passenger, stop),
            Event::Boards {
                passenger,
                location,
            } => write!(f, "boards({}, {})", passenger, location),
            Event::Alights { passenger, stop } => write!(f, "alights({}, {})", passenger, stop),
            Event::Stops { bus, stop } => write!(f, "stops({}, {})", bus, stop),
            Event::Turns { bus } => write!(f, "turns({})", bus),
        }
    }
}
