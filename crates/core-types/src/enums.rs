use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of tradable asset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Player,
    Prospect,
    Pick,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Player => write!(f, "Player"),
            AssetKind::Prospect => write!(f, "Prospect"),
            AssetKind::Pick => write!(f, "Draft Pick"),
        }
    }
}

/// Weight class of a negotiating dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Returns the multiplier applied to a factor's score differential
    /// when aggregating the overall leverage score.
    pub fn weight(&self) -> Decimal {
        match self {
            Impact::High => dec!(1.5),
            Impact::Medium => dec!(1.0),
            Impact::Low => dec!(0.5),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::High => write!(f, "High"),
            Impact::Medium => write!(f, "Medium"),
            Impact::Low => write!(f, "Low"),
        }
    }
}

/// Which party a comparison favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advantage {
    You,
    Them,
    Even,
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advantage::You => write!(f, "You"),
            Advantage::Them => write!(f, "Them"),
            Advantage::Even => write!(f, "Even"),
        }
    }
}

/// The five-bucket verdict on whether a trade's two sides are value-balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fairness {
    Fair,
    SlightEdgeA,
    SlightEdgeB,
    LopsidedA,
    LopsidedB,
}

impl Fairness {
    /// Returns the verdict as seen from the opposite side of the table.
    pub fn mirrored(&self) -> Self {
        match self {
            Fairness::Fair => Fairness::Fair,
            Fairness::SlightEdgeA => Fairness::SlightEdgeB,
            Fairness::SlightEdgeB => Fairness::SlightEdgeA,
            Fairness::LopsidedA => Fairness::LopsidedB,
            Fairness::LopsidedB => Fairness::LopsidedA,
        }
    }
}

impl fmt::Display for Fairness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fairness::Fair => write!(f, "Fair"),
            Fairness::SlightEdgeA => write!(f, "Slight edge to Side A"),
            Fairness::SlightEdgeB => write!(f, "Slight edge to Side B"),
            Fairness::LopsidedA => write!(f, "Lopsided toward Side A"),
            Fairness::LopsidedB => write!(f, "Lopsided toward Side B"),
        }
    }
}

/// Qualitative grade of one side's negotiating position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageGrade {
    Strong,
    Moderate,
    Neutral,
    Weak,
    Desperate,
}

impl fmt::Display for LeverageGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeverageGrade::Strong => write!(f, "Strong"),
            LeverageGrade::Moderate => write!(f, "Moderate"),
            LeverageGrade::Neutral => write!(f, "Neutral"),
            LeverageGrade::Weak => write!(f, "Weak"),
            LeverageGrade::Desperate => write!(f, "Desperate"),
        }
    }
}
