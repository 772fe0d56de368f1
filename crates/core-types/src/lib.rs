pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Advantage, AssetKind, Fairness, Impact, LeverageGrade};
pub use error::CoreError;
pub use structs::{
    LeverageFactor, NegotiationTarget, TradeAsset, FACTOR_ADVANTAGE_MARGIN,
    NEGOTIATION_DIMENSIONS,
};
