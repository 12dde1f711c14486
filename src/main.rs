use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;

use bus_route_sim::render;
use bus_route_sim::simulation::{
    Bus, BusStop, Direction, LinearRouteModel, Network, Passenger, Position, RouteModel,
    DEFAULT_PATIENCE,
};

#[derive(Parser)]
#[command(name = "bus_route_sim")]
#[command(about = "Linear bus route simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "100")]
    ticks: u32,

    /// Seed the RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Draw an ASCII map of the route after each tick
    #[arg(long)]
    map: bool,

    /// Pause between ticks in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let network = demo_network()?;
    let mut model = match cli.seed {
        Some(seed) => LinearRouteModel::new_with_seed(network, seed),
        None => LinearRouteModel::new(network),
    };

    // Time -1 marks the events implied by the initial state
    for event in model.init() {
        println!("(-1, {})", event);
    }

    for tick in 0..cli.ticks {
        for event in model.update() {
            println!("({}, {})", tick, event);
        }

        if cli.map {
            println!("{}", render::draw_route(model.network()));
        }

        if cli.delay_ms > 0 && tick + 1 < cli.ticks {
            std::thread::sleep(std::time::Duration::from_millis(cli.delay_ms));
        }
    }

    Ok(())
}

/// The demo scenario: a 0..100 route with four stops and two buses
fn demo_network() -> Result<Network> {
    let dave = Passenger::new("Dave", "East St", "West St", DEFAULT_PATIENCE);
    let joan = Passenger::new("Joan", "East St", "West St", DEFAULT_PATIENCE);

    let stops = vec![
        BusStop::new("East St", Position::new(0, 0), vec![dave])?,
        BusStop::new("North St", Position::new(25, 0), vec![])?,
        BusStop::new("South St", Position::new(75, 0), vec![])?,
        BusStop::new("West St", Position::new(100, 0), vec![])?,
    ];

    let buses = vec![
        Bus::new(
            "47",
            Position::new(20, 0),
            Direction::Right,
            1,
            5,
            30,
            vec![joan],
        )?,
        Bus::new("48", Position::new(40, 0), Direction::Left, 1, 5, 30, vec![])?,
    ];

    let rates = HashMap::from([
        ("East St".to_string(), 0.03),
        ("North St".to_string(), 0.05),
        ("South St".to_string(), 0.03),
    ]);

    Network::new(0, 100, stops, buses, rates)
}
