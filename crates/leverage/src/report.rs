use core_types::{Advantage, LeverageFactor, LeverageGrade, NegotiationTarget};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete read on one bilateral negotiation.
///
/// This struct is the final output of the `LeverageEngine` and serves as the
/// data transfer object for negotiation context throughout the entire system.
/// Every field is derived from the factor sheet at construction; nothing in
/// it is independently settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePartnerLeverage {
    pub target: NegotiationTarget,
    /// The scored dimensions, in canonical order.
    pub factors: Vec<LeverageFactor>,
    /// Signed aggregate: positive favors you, negative favors them.
    /// Roughly -50..+50 in practice, unbounded in principle.
    pub leverage_score: Decimal,
    pub your_leverage: LeverageGrade,
    pub their_leverage: LeverageGrade,
    pub overall_advantage: Advantage,
    pub suggested_approach: String,
    /// Estimated probability the deal gets done, as a whole percentage.
    pub deal_likelihood: Decimal,
}
