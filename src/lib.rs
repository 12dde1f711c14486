//! Bus Route Simulation Library
//!
//! A discrete-time simulation of buses picking up passengers along a linear
//! route. The engine can run headless via the CLI or be embedded as a
//! library; rendering is a read-only observer of simulation state.

pub mod render;
pub mod simulation;
