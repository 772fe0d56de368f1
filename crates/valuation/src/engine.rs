use crate::error::ValuationError;
use crate::package::{FairnessVerdict, TradePackage};
use core_types::{Fairness, TradeAsset};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Weight multiplier applied per rank when stacking assets in a package.
/// The best asset counts fully; each additional asset contributes at 75%
/// of the prior contribution's weight.
pub const DEPTH_DISCOUNT: Decimal = dec!(0.75);

/// Largest percentage gap between the two sides that still reads as fair.
pub const FAIR_PCT_THRESHOLD: Decimal = dec!(0.08);

/// Largest percentage gap that still reads as a slight edge rather than a
/// lopsided exchange.
pub const EDGE_PCT_THRESHOLD: Decimal = dec!(0.25);

/// A stateless calculator for valuing trade packages and classifying how
/// balanced an exchange is.
#[derive(Debug, Default)]
pub struct ValuationEngine {}

impl ValuationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for appraising a proposed trade.
    ///
    /// # Arguments
    ///
    /// * `side_a` - The assets moving in side A of the exchange.
    /// * `side_b` - The assets moving in side B of the exchange.
    ///
    /// # Returns
    ///
    /// A `Result` containing the valued `TradePackage` or a `ValuationError`.
    pub fn evaluate(
        &self,
        side_a: Vec<TradeAsset>,
        side_b: Vec<TradeAsset>,
    ) -> Result<TradePackage, ValuationError> {
        // --- 1. Validation ---
        // Scoring itself is total; malformed values are rejected here at the
        // boundary so the inner math never sees them.
        for asset in side_a.iter().chain(side_b.iter()) {
            if asset.value < Decimal::ZERO {
                return Err(ValuationError::NegativeAssetValue(
                    asset.name.clone(),
                    asset.value,
                ));
            }
        }

        // --- 2. Value each side and classify the gap ---
        let value_a = self.package_value(&side_a);
        let value_b = self.package_value(&side_b);
        let verdict = self.classify(value_a, value_b);

        tracing::debug!(
            "Appraised package: side A = {} ({} assets), side B = {} ({} assets), verdict = {:?}",
            value_a,
            side_a.len(),
            value_b,
            side_b.len(),
            verdict.fairness
        );

        Ok(TradePackage {
            side_a,
            side_b,
            value_a,
            value_b,
            fairness: verdict.fairness,
            differential: verdict.differential,
        })
    }

    /// Aggregates one side of a trade into a single scalar value with
    /// diminishing returns for depth pieces.
    ///
    /// Assets are ranked by raw value; the best asset counts fully and the
    /// asset at 1-indexed rank `i` contributes `value * 0.75^i`. Stacking
    /// many mediocre assets is therefore worth less than one great one plus
    /// a couple of good ones. The result is rounded to one decimal place.
    ///
    /// Pure and total: an empty side values to zero, not an error.
    pub fn package_value(&self, assets: &[TradeAsset]) -> Decimal {
        let mut values: Vec<Decimal> = assets.iter().map(|a| a.value).collect();
        values.sort_by(|a, b| b.cmp(a));

        let mut total = Decimal::ZERO;
        let mut weight = Decimal::ONE;
        for value in values {
            total += value * weight;
            weight *= DEPTH_DISCOUNT;
        }

        total.round_dp(1)
    }

    /// Compares the two aggregated side values and buckets the trade into a
    /// fairness category.
    ///
    /// The gap is measured as a percentage of the average side value, with a
    /// zero average short-circuiting to a zero gap. Every real-valued pair
    /// maps to exactly one of the five buckets.
    pub fn classify(&self, value_a: Decimal, value_b: Decimal) -> FairnessVerdict {
        let differential = (value_a - value_b).round_dp(1);

        let avg = (value_a + value_b) / dec!(2);
        let pct_diff = if avg.is_zero() {
            Decimal::ZERO
        } else {
            differential.abs() / avg
        };

        let fairness = if pct_diff <= FAIR_PCT_THRESHOLD {
            Fairness::Fair
        } else if differential > Decimal::ZERO && pct_diff <= EDGE_PCT_THRESHOLD {
            Fairness::SlightEdgeA
        } else if differential < Decimal::ZERO && pct_diff <= EDGE_PCT_THRESHOLD {
            Fairness::SlightEdgeB
        } else if differential > Decimal::ZERO {
            Fairness::LopsidedA
        } else {
            Fairness::LopsidedB
        };

        FairnessVerdict {
            fairness,
            differential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::AssetKind;

    fn asset(name: &str, value: Decimal) -> TradeAsset {
        TradeAsset {
            name: name.to_string(),
            kind: AssetKind::Player,
            value,
            position: "OF".to_string(),
        }
    }

    #[test]
    fn test_empty_side_values_to_zero() {
        let engine = ValuationEngine::new();
        assert_eq!(engine.package_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_single_asset_counts_fully() {
        let engine = ValuationEngine::new();
        assert_eq!(engine.package_value(&[asset("Ace", dec!(80))]), dec!(80.0));
    }

    #[test]
    fn test_depth_pieces_are_discounted_geometrically() {
        let engine = ValuationEngine::new();
        // 80 + 40*0.75 + 40*0.5625 = 132.5; the k-th ranked asset carries
        // exactly 0.75^(k-1) of its raw value.
        let side = vec![
            asset("Ace", dec!(80)),
            asset("Second", dec!(40)),
            asset("Third", dec!(40)),
        ];
        assert_eq!(engine.package_value(&side), dec!(132.5));
    }

    #[test]
    fn test_valuation_is_permutation_invariant() {
        let engine = ValuationEngine::new();
        let forward = vec![
            asset("A", dec!(55)),
            asset("B", dec!(40)),
            asset("C", dec!(25)),
        ];
        let shuffled = vec![
            asset("C", dec!(25)),
            asset("A", dec!(55)),
            asset("B", dec!(40)),
        ];
        assert_eq!(
            engine.package_value(&forward),
            engine.package_value(&shuffled)
        );
    }

    #[test]
    fn test_adding_an_asset_never_decreases_value() {
        let engine = ValuationEngine::new();
        let mut side = vec![asset("A", dec!(60)), asset("B", dec!(35))];
        let before = engine.package_value(&side);
        side.push(asset("C", dec!(10)));
        assert!(engine.package_value(&side) >= before);
    }

    #[test]
    fn test_fair_boundary_is_inclusive() {
        let engine = ValuationEngine::new();
        // 8 / 100 lands exactly on the 8% threshold.
        let verdict = engine.classify(dec!(104), dec!(96));
        assert_eq!(verdict.fairness, Fairness::Fair);
    }

    #[test]
    fn test_just_past_fair_boundary_is_an_edge() {
        let engine = ValuationEngine::new();
        // 8 / 96 is about 8.33%, past the threshold.
        let verdict = engine.classify(dec!(100), dec!(92));
        assert_eq!(verdict.fairness, Fairness::SlightEdgeA);
    }

    #[test]
    fn test_classification_mirrors_under_side_swap() {
        let engine = ValuationEngine::new();
        let pairs = [
            (dec!(100), dec!(92)),
            (dec!(104), dec!(96)),
            (dec!(85), dec!(53.4)),
            (dec!(30), dec!(70)),
        ];
        for (a, b) in pairs {
            let forward = engine.classify(a, b);
            let swapped = engine.classify(b, a);
            assert_eq!(forward.fairness.mirrored(), swapped.fairness);
            assert_eq!(forward.differential, -swapped.differential);
        }
    }

    #[test]
    fn test_two_empty_sides_classify_as_fair() {
        let engine = ValuationEngine::new();
        let verdict = engine.classify(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(verdict.fairness, Fairness::Fair);
        assert_eq!(verdict.differential, Decimal::ZERO);
    }

    #[test]
    fn test_full_appraisal_of_a_lopsided_package() {
        let engine = ValuationEngine::new();
        let side_a = vec![asset("Star", dec!(55)), asset("Starter", dec!(40))];
        let side_b = vec![
            asset("Mid", dec!(30)),
            asset("Depth", dec!(20)),
            asset("Flyer", dec!(15)),
        ];

        let package = engine.evaluate(side_a, side_b).unwrap();

        // 55 + 40*0.75 = 85.0 against 30 + 20*0.75 + 15*0.5625 = 53.4;
        // the 31.6 gap is about 46% of the average side value.
        assert_eq!(package.value_a, dec!(85.0));
        assert_eq!(package.value_b, dec!(53.4));
        assert_eq!(package.differential, dec!(31.6));
        assert_eq!(package.fairness, Fairness::LopsidedA);
    }

    #[test]
    fn test_negative_asset_value_is_rejected_at_the_boundary() {
        let engine = ValuationEngine::new();
        let result = engine.evaluate(vec![asset("Broken", dec!(-10))], vec![]);
        assert!(matches!(
            result,
            Err(ValuationError::NegativeAssetValue(_, _))
        ));
    }

    #[test]
    fn test_display_order_of_sides_is_preserved() {
        let engine = ValuationEngine::new();
        let side_a = vec![asset("Depth", dec!(20)), asset("Star", dec!(70))];
        let package = engine.evaluate(side_a, vec![]).unwrap();
        // Ranking is internal to the valuation; the submitted order survives.
        assert_eq!(package.side_a[0].name, "Depth");
        assert_eq!(package.side_a[1].name, "Star");
    }
}
