use core_types::{LeverageFactor, NegotiationTarget, TradeAsset};
use serde::{Deserialize, Serialize};

/// A complete bundle of engine inputs for one trade negotiation.
///
/// This is the shape the presentation layer feeds to the valuation and
/// leverage engines. A scenario can come from the demo generator or from a
/// JSON file; any real data source that produces this shape can replace
/// both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeScenario {
    pub target: NegotiationTarget,
    /// The package your franchise sends out (side A of the exchange).
    pub side_a: Vec<TradeAsset>,
    /// The package your franchise receives (side B of the exchange).
    pub side_b: Vec<TradeAsset>,
    /// The scored negotiation sheet, in canonical dimension order.
    pub factors: Vec<LeverageFactor>,
}
