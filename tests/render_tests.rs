//! Rendering collaborator tests
//!
//! Rendering only ever reads positions and passenger counts; these tests
//! check the primitives track the network across ticks.

use std::collections::HashMap;

use bus_route_sim::render::{draw_route, RouteScene};
use bus_route_sim::simulation::{
    Bus, BusStop, Direction, LinearRouteModel, Network, Passenger, Position, RouteModel,
    DEFAULT_PATIENCE,
};

fn demo_network() -> Network {
    let joan = Passenger::new("Joan", "East St", "West St", DEFAULT_PATIENCE);
    let stops = vec![
        BusStop::new("East St", Position::new(0, 0), vec![joan]).unwrap(),
        BusStop::new("West St", Position::new(10, 0), vec![]).unwrap(),
    ];
    let buses =
        vec![Bus::new("47", Position::new(3, 0), Direction::Right, 1, 5, 30, vec![]).unwrap()];
    Network::new(0, 10, stops, buses, HashMap::new()).unwrap()
}

#[test]
fn test_scene_captures_markers_and_counts() {
    let network = demo_network();
    let scene = RouteScene::new(&network);

    assert_eq!(scene.start, 0);
    assert_eq!(scene.end, 10);
    assert_eq!(scene.stops.len(), 2);
    assert_eq!(scene.stops[0].label, "East St");
    assert_eq!(scene.stops[0].passenger_count, 1);
    assert_eq!(scene.buses.len(), 1);
    assert_eq!(scene.buses[0].x, 3);
    assert_eq!(scene.buses[0].passenger_count, 0);
}

#[test]
fn test_scene_refresh_tracks_ticks() {
    let mut model = LinearRouteModel::new(demo_network());
    model.init();

    let mut scene = RouteScene::new(model.network());
    model.update();
    scene.refresh(model.network());

    assert_eq!(scene.buses[0].x, 4);
}

#[test]
fn test_draw_route_handles_inverted_bounds() {
    // Construction only warns when start is not before end, so drawing has
    // to cope with an inverted route too
    let stops = vec![BusStop::new("East St", Position::new(0, 0), vec![]).unwrap()];
    let buses =
        vec![Bus::new("47", Position::new(3, 0), Direction::Right, 1, 5, 30, vec![]).unwrap()];
    let network = Network::new(10, 0, stops, buses, HashMap::new()).unwrap();

    let drawn = draw_route(&network);
    let route_line = drawn.lines().next().unwrap();

    assert_eq!(route_line.len(), 11);
    assert_eq!(route_line.chars().nth(0), Some('|'));
    assert_eq!(route_line.chars().nth(3), Some('>'));
}

#[test]
fn test_draw_route_marks_stops_and_buses() {
    let network = demo_network();
    let drawn = draw_route(&network);
    let route_line = drawn.lines().next().unwrap();

    assert_eq!(route_line.len(), 11);
    assert_eq!(route_line.chars().nth(0), Some('|'));
    assert_eq!(route_line.chars().nth(3), Some('>'));
    assert_eq!(route_line.chars().nth(10), Some('|'));
    assert!(drawn.contains("East St (x=0): 1 waiting"));
    assert!(drawn.contains("bus 47 (x=3): 0 aboard"));
}
