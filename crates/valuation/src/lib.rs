//! # Dugout Package Valuation
//!
//! This crate values the two sides of a proposed trade and classifies how
//! balanced the exchange is. It acts as the "appraiser" of the front office.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ValuationEngine` is a stateless
//!   calculator. It takes raw asset records as input and produces a
//!   `TradePackage` as output. This makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `ValuationEngine`: The main struct that contains the calculation logic.
//! - `TradePackage`: The standardized struct that holds the valued trade.
//! - `ValuationError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod package;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ValuationEngine;
pub use error::ValuationError;
pub use package::{FairnessVerdict, TradePackage};
