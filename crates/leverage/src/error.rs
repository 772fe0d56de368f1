use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeverageError {
    #[error("Cannot score a negotiation with no factors")]
    EmptyFactorSheet,

    #[error("Factor '{0}' carries a score outside the 0-100 scale ({1})")]
    ScoreOutOfRange(String, Decimal),
}
