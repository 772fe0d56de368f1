use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Asset '{0}' carries a negative trade value ({1})")]
    NegativeAssetValue(String, Decimal),
}
