//! Linear route engine
//!
//! This is the concrete simulation strategy for a single linear route. Each
//! tick it moves every bus, handles boarding and alighting at any stop a bus
//! passes over, decays queued passengers' patience, reverses buses at the
//! route boundaries, and randomly spawns new passengers per the configured
//! arrival rates.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::model::RouteModel;
use super::network::Network;
use super::passenger::Passenger;
use super::types::{Direction, Event, DEFAULT_PATIENCE};

/// The linear bus route simulation engine
///
/// Owns the network for its whole lifetime and is the only code that mutates
/// it; rendering and other observers get a shared borrow via
/// [`network`](LinearRouteModel::network).
pub struct LinearRouteModel {
    network: Network,
    /// Counter behind the synthetic "randomN" passenger names
    passenger_seq: usize,
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl LinearRouteModel {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            passenger_seq: 0,
            rng: None,
        }
    }

    /// Create a model with a seeded RNG for reproducible simulations
    pub fn new_with_seed(network: Network, seed: u64) -> Self {
        Self {
            network,
            passenger_seq: 0,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Read-only view of the current simulation state
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Draw a uniform value in [0, 1), using the seeded RNG if available
    fn random_unit(&mut self) -> f64 {
        match &mut self.rng {
            Some(rng) => rng.random_range(0.0..1.0),
            None => rand::rng().random_range(0.0..1.0),
        }
    }

    /// Draw a random per-tick speed in [1, max_speed]
    fn random_speed(&mut self, max_speed: i64) -> i64 {
        match &mut self.rng {
            Some(rng) => rng.random_range(1..=max_speed),
            None => rand::rng().random_range(1..=max_speed),
        }
    }

    /// Draw a uniform index in [0, len)
    fn random_index(&mut self, len: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..len),
            None => rand::rng().random_range(0..len),
        }
    }

    /// Move one bus, stopping at every stop it passes over
    fn update_bus(&mut self, bus_idx: usize) -> Vec<Event> {
        let (configured_speed, max_speed) = {
            let bus = &self.network.buses[bus_idx];
            (bus.speed, bus.max_speed)
        };
        let speed = if configured_speed > 0 {
            configured_speed
        } else {
            self.random_speed(max_speed)
        };

        let bus = &mut self.network.buses[bus_idx];
        let old_x = bus.position.x;
        let new_x = old_x + speed * bus.direction.delta();
        bus.position.x = new_x;
        let direction = bus.direction;

        let mut events = Vec::new();

        if direction == Direction::Right {
            for stop_idx in 0..self.network.stops.len() {
                let stop_x = self.network.stops[stop_idx].position.x;
                if old_x < stop_x && stop_x <= new_x {
                    events.extend(self.stop_at(bus_idx, stop_idx));
                }
            }
        }
        // Left-moving buses never stop: all passengers travel left to right

        let bus = &mut self.network.buses[bus_idx];
        if new_x < self.network.start || new_x > self.network.end {
            bus.direction = bus.direction.reversed();
            debug!("bus {} turns around at x={}", bus.name, new_x);
            events.push(Event::Turns {
                bus: bus.name.clone(),
            });
        }

        events
    }

    /// Handle a bus stopping at a stop: alight, then board up to capacity
    fn stop_at(&mut self, bus_idx: usize, stop_idx: usize) -> Vec<Event> {
        let bus = &mut self.network.buses[bus_idx];
        let stop = &mut self.network.stops[stop_idx];

        // Passengers get off if this is their stop
        let mut staying: Vec<Passenger> = Vec::new();
        let mut leaving: Vec<Passenger> = Vec::new();
        for passenger in bus.passengers.drain(..) {
            if passenger.destination == stop.name {
                leaving.push(passenger);
            } else {
                staying.push(passenger);
            }
        }

        // Waiting passengers board front-of-queue first, limited by the
        // seats left after those staying aboard
        let boarding_count = if bus.capacity < 0 {
            stop.passengers.len()
        } else {
            let free = (bus.capacity as usize).saturating_sub(staying.len());
            free.min(stop.passengers.len())
        };
        let boarding: Vec<Passenger> = stop.passengers.drain(..boarding_count).collect();

        debug!(
            "bus {} stops at {}: {} alight, {} board, {} left queued",
            bus.name,
            stop.name,
            leaving.len(),
            boarding.len(),
            stop.passengers.len()
        );

        let mut events = vec![Event::Stops {
            bus: bus.name.clone(),
            stop: stop.name.clone(),
        }];
        for passenger in &leaving {
            events.push(Event::Alights {
                passenger: passenger.name.clone(),
                stop: stop.name.clone(),
            });
        }
        for passenger in &boarding {
            events.push(Event::Boards {
                passenger: passenger.name.clone(),
                location: stop.name.clone(),
            });
        }

        bus.passengers = staying;
        bus.passengers.extend(boarding);
        // Leaving passengers are dropped here; they live on in the event log
        events
    }

    /// Decay every queued passenger's patience by one, floored at 0
    fn decay_patience(&mut self) {
        for stop in &mut self.network.stops {
            for passenger in &mut stop.passengers {
                passenger.patience = passenger.patience.saturating_sub(1);
            }
        }
    }

    /// Maybe spawn one new passenger at the given stop
    fn update_stop(&mut self, stop_idx: usize) -> Vec<Event> {
        let rate = match self.network.rates.get(&self.network.stops[stop_idx].name) {
            Some(rate) => *rate,
            None => return Vec::new(),
        };
        if rate <= self.random_unit() {
            return Vec::new();
        }
        let stop_name = self.network.stops[stop_idx].name.clone();

        // A new passenger arrives with a uniformly random destination, which
        // may be the stop they arrive at
        let destination_idx = self.random_index(self.network.stops.len());
        let destination = self.network.stops[destination_idx].name.clone();
        let name = format!("random{}", self.passenger_seq);
        self.passenger_seq += 1;

        debug!("passenger {} arrives at {} for {}", name, stop_name, destination);

        let passenger = Passenger::new(
            name.clone(),
            stop_name.clone(),
            destination,
            DEFAULT_PATIENCE,
        );
        self.network.stops[stop_idx].passengers.push_back(passenger);

        vec![Event::Waits {
            passenger: name,
            stop: stop_name,
        }]
    }
}

impl RouteModel for LinearRouteModel {
    /// Report the implicit initial state: everyone already waiting at a stop
    /// or already aboard a bus
    fn init(&mut self) -> Vec<Event> {
        self.passenger_seq = 0;

        let mut events = Vec::new();
        for stop in &self.network.stops {
            for passenger in &stop.passengers {
                events.push(Event::Waits {
                    passenger: passenger.name.clone(),
                    stop: stop.name.clone(),
                });
            }
        }
        for bus in &self.network.buses {
            for passenger in &bus.passengers {
                events.push(Event::Boards {
                    passenger: passenger.name.clone(),
                    location: bus.name.clone(),
                });
            }
        }
        events
    }

    fn update(&mut self) -> Vec<Event> {
        let mut events = Vec::new();

        for bus_idx in 0..self.network.buses.len() {
            events.extend(self.update_bus(bus_idx));
        }

        // Exactly once per tick, after boarding and alighting are settled
        self.decay_patience();

        for stop_idx in 0..self.network.stops.len() {
            events.extend(self.update_stop(stop_idx));
        }

        events
    }
}
