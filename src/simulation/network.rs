//! Network container: route bounds, stops, buses, and arrival rates
//!
//! The network is a plain owned-data container with construction-time
//! validation only. All behavior (movement, boarding, spawning) lives in the
//! engine that owns it.

use std::collections::{HashMap, HashSet};

use anyhow::{ensure, Result};
use log::warn;

use super::bus::Bus;
use super::stop::BusStop;

/// The complete state of one linear bus route
///
/// Iteration order for stops and buses is their insertion order, and the
/// engine's event ordering is defined in terms of it.
#[derive(Debug, Clone)]
pub struct Network {
    /// Coordinate of the start of the route
    pub start: i64,
    /// Coordinate of the end of the route
    pub end: i64,
    pub stops: Vec<BusStop>,
    pub buses: Vec<Bus>,
    /// Per-tick probability in [0, 1) of a new passenger arriving, keyed by
    /// stop name; stops without an entry never spawn
    pub rates: HashMap<String, f64>,
}

impl Network {
    pub fn new(
        start: i64,
        end: i64,
        stops: Vec<BusStop>,
        buses: Vec<Bus>,
        rates: HashMap<String, f64>,
    ) -> Result<Self> {
        if start >= end {
            warn!(
                "route start {} is not before end {}; every bus will turn around each tick",
                start, end
            );
        }

        let mut stop_names = HashSet::new();
        for stop in &stops {
            ensure!(
                stop_names.insert(stop.name.as_str()),
                "duplicate stop name {}",
                stop.name
            );
        }

        let mut bus_names = HashSet::new();
        for bus in &buses {
            ensure!(
                bus_names.insert(bus.name.as_str()),
                "duplicate bus name {}",
                bus.name
            );
        }

        for (stop_name, rate) in &rates {
            ensure!(
                (0.0..1.0).contains(rate),
                "arrival rate for {} should be in [0, 1), got {}",
                stop_name,
                rate
            );
            if !stop_names.contains(stop_name.as_str()) {
                warn!("arrival rate given for unknown stop {}", stop_name);
            }
        }

        Ok(Self {
            start,
            end,
            stops,
            buses,
            rates,
        })
    }
}
