//! # Dugout Negotiation Leverage
//!
//! This crate scores a bilateral trade negotiation: not asset-for-asset, but
//! team-vs-team context. Seven weighted dimensions (roster urgency, payroll
//! room, competitive window, deadline pressure, ...) collapse into one signed
//! leverage score, a qualitative grade per side, and a suggested negotiating
//! approach.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `LeverageEngine` is a stateless
//!   calculator. It takes factor records as input and produces a
//!   `TradePartnerLeverage` report as output.
//!
//! ## Public API
//!
//! - `LeverageEngine`: The main struct that contains the scoring logic.
//! - `TradePartnerLeverage`: The standardized report for one negotiation.
//! - `Recommendation` / `recommend`: The suggested-approach composer.
//! - `LeverageError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod recommendation;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::LeverageEngine;
pub use error::LeverageError;
pub use recommendation::{recommend, Recommendation};
pub use report::TradePartnerLeverage;
