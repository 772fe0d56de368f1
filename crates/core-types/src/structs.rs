use crate::enums::{Advantage, AssetKind, Impact};
use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How far one side's factor score must exceed the other's before that
/// dimension is counted as an advantage rather than a wash.
pub const FACTOR_ADVANTAGE_MARGIN: Decimal = dec!(10);

/// A single tradable unit: a player, a prospect, or a draft pick.
///
/// Assets are plain value objects. They are constructed fresh for each
/// evaluation request and carry no identity beyond the package that
/// contains them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAsset {
    pub name: String,
    pub kind: AssetKind,
    /// Trade value in unitless "trade points", roughly 0-100 in practice.
    /// Must be non-negative.
    pub value: Decimal,
    /// Roster position, or a literal marker for draft picks.
    pub position: String,
}

impl TradeAsset {
    /// Creates a new asset, rejecting negative trade values.
    pub fn new(
        name: String,
        kind: AssetKind,
        value: Decimal,
        position: String,
    ) -> Result<Self, CoreError> {
        if value < Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "TradeAsset.value".to_string(),
                format!("trade value must be non-negative, got {}", value),
            ));
        }
        Ok(Self {
            name,
            kind,
            value,
            position,
        })
    }
}

/// One dimension of a bilateral negotiation, scored independently for
/// both front offices on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverageFactor {
    /// Name of the negotiating dimension (e.g. "Roster Need Urgency").
    pub factor: String,
    pub your_score: Decimal,
    pub their_score: Decimal,
    pub impact: Impact,
}

impl LeverageFactor {
    /// Which side this single dimension favors.
    ///
    /// Derived on demand rather than stored, so it can never disagree
    /// with the scores that produce it.
    pub fn advantage(&self) -> Advantage {
        let margin = self.your_score - self.their_score;
        if margin > FACTOR_ADVANTAGE_MARGIN {
            Advantage::You
        } else if margin < -FACTOR_ADVANTAGE_MARGIN {
            Advantage::Them
        } else {
            Advantage::Even
        }
    }
}

/// The canonical seven dimensions a bilateral negotiation is scored on,
/// with the weight class each carries. High-impact dimensions dominate the
/// aggregate leverage score.
pub const NEGOTIATION_DIMENSIONS: [(&str, Impact); 7] = [
    ("Roster Need Urgency", Impact::High),
    ("Financial Flexibility", Impact::High),
    ("Competitive Window", Impact::High),
    ("Prospect Capital", Impact::Medium),
    ("Trade Deadline Pressure", Impact::Medium),
    ("Alternative Trade Partners", Impact::Low),
    ("Media and Fan Pressure", Impact::Low),
];

/// Identifies who a negotiation is about and which franchises are at the
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationTarget {
    /// The player the trade talks revolve around.
    pub player: String,
    pub position: String,
    pub your_team: String,
    pub their_team: String,
}
