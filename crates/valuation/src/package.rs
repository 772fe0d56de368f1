use core_types::{Fairness, TradeAsset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully valued trade proposal.
///
/// This struct is the final output of the `ValuationEngine` and serves as the
/// data transfer object for trade appraisals throughout the entire system.
///
/// The derived fields (`value_a`, `value_b`, `fairness`, `differential`) are
/// pure functions of the two asset lists and are computed once, at
/// construction. They must never be set independently of the sides that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePackage {
    /// Assets moving in side A of the exchange, in the order submitted.
    pub side_a: Vec<TradeAsset>,
    /// Assets moving in side B of the exchange, in the order submitted.
    pub side_b: Vec<TradeAsset>,
    /// Aggregated value of side A, one decimal place.
    pub value_a: Decimal,
    /// Aggregated value of side B, one decimal place.
    pub value_b: Decimal,
    pub fairness: Fairness,
    /// `value_a - value_b`, signed, one decimal place.
    pub differential: Decimal,
}

/// The outcome of comparing two aggregated side values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessVerdict {
    pub fairness: Fairness,
    pub differential: Decimal,
}
