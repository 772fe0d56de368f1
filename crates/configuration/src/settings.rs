use chrono::NaiveDate;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub demo: DemoSettings,
}

/// Parameters for the demo scenario factory.
///
/// These describe the sample negotiation the CLI evaluates when no scenario
/// file is supplied. Scoring policy (thresholds, weights, discounts) is
/// deliberately not configurable; those are fixed constants in the engine
/// crates.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    /// Seed for the scenario generator. The same seed always produces the
    /// same rosters and factor scores.
    pub seed: u64,
    /// The franchise you are running.
    pub your_team: String,
    /// The franchise across the table.
    pub their_team: String,
    /// The player the trade talks revolve around.
    pub target_player: String,
    /// Roster position of the target player (e.g. "SP").
    pub target_position: String,
    /// The league trade deadline.
    pub deadline: NaiveDate,
    /// The date the negotiation is evaluated as of. Deadline pressure in the
    /// demo factor sheet scales with the days remaining between this date
    /// and the deadline.
    pub as_of: NaiveDate,
}
