//! Read-only rendering for the bus route simulation
//!
//! This module is a pure observer: it borrows the network after a tick
//! completes and turns positions and passenger counts into drawable
//! primitives, or into an ASCII view for the terminal. It never mutates
//! simulation state and has no dependency on the event log.

use crate::simulation::Network;

/// A labelled marker on the route, drawable by any frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub x: i64,
    pub y: i64,
    pub label: String,
    /// Passengers queued at the stop or riding the bus
    pub passenger_count: usize,
}

/// Drawable primitives for one frame of the simulation
#[derive(Debug, Clone, Default)]
pub struct RouteScene {
    /// Route segment endpoints on the x axis
    pub start: i64,
    pub end: i64,
    pub stops: Vec<Marker>,
    pub buses: Vec<Marker>,
}

impl RouteScene {
    /// Build the initial scene from the network state
    pub fn new(network: &Network) -> Self {
        let mut scene = Self::default();
        scene.refresh(network);
        scene
    }

    /// Re-read the network after a tick and refresh all primitives
    pub fn refresh(&mut self, network: &Network) {
        self.start = network.start;
        self.end = network.end;

        self.stops.clear();
        for stop in &network.stops {
            self.stops.push(Marker {
                x: stop.position.x,
                y: stop.position.y,
                label: stop.name.clone(),
                passenger_count: stop.passengers.len(),
            });
        }

        self.buses.clear();
        for bus in &network.buses {
            self.buses.push(Marker {
                x: bus.position.x,
                y: bus.position.y,
                label: bus.name.clone(),
                passenger_count: bus.passengers.len(),
            });
        }
    }
}

/// Draw a one-line ASCII map of the route with a queue summary below it
///
/// Legend: `|`=stop, `>`/`<`=bus by direction, `-`=route. Buses that have
/// overshot a boundary are clamped to the edge of the drawing only.
pub fn draw_route(network: &Network) -> String {
    // Inverted bounds are accepted at construction; normalize for drawing
    let (lo, hi) = if network.start <= network.end {
        (network.start, network.end)
    } else {
        (network.end, network.start)
    };
    let width = (hi - lo) as usize + 1;
    let mut line: Vec<char> = vec!['-'; width];

    let to_col = |x: i64| -> usize { (x.clamp(lo, hi) - lo) as usize };

    for stop in &network.stops {
        line[to_col(stop.position.x)] = '|';
    }
    for bus in &network.buses {
        let glyph = if bus.direction.delta() > 0 { '>' } else { '<' };
        line[to_col(bus.position.x)] = glyph;
    }

    let mut out = String::new();
    out.push_str(&line.iter().collect::<String>());
    out.push('\n');
    for stop in &network.stops {
        out.push_str(&format!(
            "  {} (x={}): {} waiting\n",
            stop.name,
            stop.position.x,
            stop.passengers.len()
        ));
    }
    for bus in &network.buses {
        out.push_str(&format!(
            "  bus {} (x={}): {} aboard\n",
            bus.name,
            bus.position.x,
            bus.passengers.len()
        ));
    }
    out
}
