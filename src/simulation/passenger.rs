//! Passenger entity

/// A bus passenger travelling from one named stop to another
///
/// Passengers are created at scenario setup or spawned by the engine, and
/// are dropped once they alight at their destination; after that they only
/// exist in the event log.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub name: String,
    /// Name of the stop the passenger starts from
    pub source: String,
    /// Name of the stop the passenger wants to reach
    pub destination: String,
    /// Remaining patience; decays by one per tick while queued, floored at 0
    pub patience: u32,
}

impl Passenger {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        patience: u32,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            patience,
        }
    }
}
