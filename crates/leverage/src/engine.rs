use crate::error::LeverageError;
use crate::recommendation::recommend;
use crate::report::TradePartnerLeverage;
use core_types::{Advantage, LeverageFactor, LeverageGrade, NegotiationTarget};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Neutral starting position for both front offices before the leverage
/// score shifts the balance.
pub const GRADE_BASELINE: Decimal = dec!(60);

/// Half-width of the dead zone around zero inside which neither side is
/// credited with the overall advantage. Keeps noisy near-balanced scores
/// from claiming an edge.
pub const ADVANTAGE_DEAD_ZONE: Decimal = dec!(5);

const STRONG_FLOOR: Decimal = dec!(75);
const MODERATE_FLOOR: Decimal = dec!(55);
const NEUTRAL_FLOOR: Decimal = dec!(40);
const WEAK_FLOOR: Decimal = dec!(25);

const SCORE_SCALE_MIN: Decimal = dec!(0);
const SCORE_SCALE_MAX: Decimal = dec!(100);

/// A stateless calculator for reading the balance of power in a trade
/// negotiation.
#[derive(Debug, Default)]
pub struct LeverageEngine {}

impl LeverageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for scoring a negotiation.
    ///
    /// # Arguments
    ///
    /// * `target` - Who the talks revolve around and which franchises are involved.
    /// * `factors` - The scored negotiating dimensions, in display order.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `TradePartnerLeverage` report or a `LeverageError`.
    pub fn evaluate(
        &self,
        target: NegotiationTarget,
        factors: Vec<LeverageFactor>,
    ) -> Result<TradePartnerLeverage, LeverageError> {
        // --- 1. Validation ---
        if factors.is_empty() {
            return Err(LeverageError::EmptyFactorSheet);
        }
        for factor in &factors {
            for score in [factor.your_score, factor.their_score] {
                if !(SCORE_SCALE_MIN..=SCORE_SCALE_MAX).contains(&score) {
                    return Err(LeverageError::ScoreOutOfRange(factor.factor.clone(), score));
                }
            }
        }

        // --- 2. Aggregate and grade ---
        let leverage_score = self.leverage_score(&factors);
        let your_leverage = self.grade(GRADE_BASELINE + leverage_score);
        let their_leverage = self.grade(GRADE_BASELINE - leverage_score);
        let overall_advantage = self.overall_advantage(leverage_score);
        let recommendation = recommend(leverage_score);

        tracing::debug!(
            "Scored negotiation for {} with {}: score = {}, advantage = {:?}",
            target.player,
            target.their_team,
            leverage_score,
            overall_advantage
        );

        Ok(TradePartnerLeverage {
            target,
            factors,
            leverage_score,
            your_leverage,
            their_leverage,
            overall_advantage,
            suggested_approach: recommendation.suggested_approach,
            deal_likelihood: recommendation.deal_likelihood,
        })
    }

    /// Collapses the factor sheet into one signed scalar: the mean of the
    /// weighted score differentials, rounded to the nearest integer.
    ///
    /// High-impact dimensions carry a 1.5x weight, low-impact a 0.5x, so
    /// roster urgency or payroll room moves the needle far more than media
    /// noise.
    pub fn leverage_score(&self, factors: &[LeverageFactor]) -> Decimal {
        if factors.is_empty() {
            return Decimal::ZERO;
        }

        let weighted_total: Decimal = factors
            .iter()
            .map(|f| (f.your_score - f.their_score) * f.impact.weight())
            .sum();

        (weighted_total / Decimal::from(factors.len())).round()
    }

    /// Maps one side's negotiating position (baseline plus or minus the
    /// leverage score) onto the fixed five-bucket grade scale.
    pub fn grade(&self, position: Decimal) -> LeverageGrade {
        if position >= STRONG_FLOOR {
            LeverageGrade::Strong
        } else if position >= MODERATE_FLOOR {
            LeverageGrade::Moderate
        } else if position >= NEUTRAL_FLOOR {
            LeverageGrade::Neutral
        } else if position >= WEAK_FLOOR {
            LeverageGrade::Weak
        } else {
            LeverageGrade::Desperate
        }
    }

    /// Who holds the whip hand overall, with a dead zone so a near-balanced
    /// score reads as even.
    fn overall_advantage(&self, leverage_score: Decimal) -> Advantage {
        if leverage_score > ADVANTAGE_DEAD_ZONE {
            Advantage::You
        } else if leverage_score < -ADVANTAGE_DEAD_ZONE {
            Advantage::Them
        } else {
            Advantage::Even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Impact, NEGOTIATION_DIMENSIONS};

    fn factor(name: &str, yours: Decimal, theirs: Decimal, impact: Impact) -> LeverageFactor {
        LeverageFactor {
            factor: name.to_string(),
            your_score: yours,
            their_score: theirs,
            impact,
        }
    }

    fn target() -> NegotiationTarget {
        NegotiationTarget {
            player: "Dario Canela".to_string(),
            position: "SP".to_string(),
            your_team: "Portland Pioneers".to_string(),
            their_team: "Charlotte Knights".to_string(),
        }
    }

    #[test]
    fn test_weighted_mean_of_differentials() {
        let engine = LeverageEngine::new();
        // (+20 * 1.5) + (+10 * 1.0) + (-20 * 0.5) = 30, over 3 factors = 10.
        let factors = vec![
            factor("Roster Need Urgency", dec!(80), dec!(60), Impact::High),
            factor("Prospect Capital", dec!(60), dec!(50), Impact::Medium),
            factor("Media and Fan Pressure", dec!(30), dec!(50), Impact::Low),
        ];
        assert_eq!(engine.leverage_score(&factors), dec!(10));
    }

    #[test]
    fn test_score_rounds_to_nearest_integer() {
        let engine = LeverageEngine::new();
        // (+9 * 1.5) / 2 = 6.75 -> 7.
        let factors = vec![
            factor("Competitive Window", dec!(59), dec!(50), Impact::High),
            factor("Prospect Capital", dec!(50), dec!(50), Impact::Medium),
        ];
        assert_eq!(engine.leverage_score(&factors), dec!(7));
    }

    #[test]
    fn test_dead_zone_boundaries() {
        let engine = LeverageEngine::new();
        // One medium factor: the differential is the score.
        let sheet = |diff: Decimal| {
            vec![factor(
                "Roster Need Urgency",
                dec!(50) + diff,
                dec!(50),
                Impact::Medium,
            )]
        };

        for (diff, expected) in [
            (dec!(5), Advantage::Even),
            (dec!(-5), Advantage::Even),
            (dec!(6), Advantage::You),
            (dec!(-6), Advantage::Them),
        ] {
            let report = engine.evaluate(target(), sheet(diff)).unwrap();
            assert_eq!(report.leverage_score, diff);
            assert_eq!(report.overall_advantage, expected);
        }
    }

    #[test]
    fn test_grade_scale_boundaries() {
        let engine = LeverageEngine::new();
        assert_eq!(engine.grade(dec!(75)), LeverageGrade::Strong);
        assert_eq!(engine.grade(dec!(74)), LeverageGrade::Moderate);
        assert_eq!(engine.grade(dec!(55)), LeverageGrade::Moderate);
        assert_eq!(engine.grade(dec!(54)), LeverageGrade::Neutral);
        assert_eq!(engine.grade(dec!(40)), LeverageGrade::Neutral);
        assert_eq!(engine.grade(dec!(39)), LeverageGrade::Weak);
        assert_eq!(engine.grade(dec!(25)), LeverageGrade::Weak);
        assert_eq!(engine.grade(dec!(24)), LeverageGrade::Desperate);
    }

    #[test]
    fn test_grades_are_mirrored_around_the_baseline() {
        let engine = LeverageEngine::new();
        // A +20 score puts you at 80 (Strong) and them at 40 (Neutral).
        let factors = vec![factor(
            "Financial Flexibility",
            dec!(75),
            dec!(55),
            Impact::Medium,
        )];
        let report = engine.evaluate(target(), factors).unwrap();
        assert_eq!(report.leverage_score, dec!(20));
        assert_eq!(report.your_leverage, LeverageGrade::Strong);
        assert_eq!(report.their_leverage, LeverageGrade::Neutral);
        assert_eq!(report.overall_advantage, Advantage::You);
    }

    #[test]
    fn test_empty_factor_sheet_is_rejected() {
        let engine = LeverageEngine::new();
        let result = engine.evaluate(target(), Vec::new());
        assert!(matches!(result, Err(LeverageError::EmptyFactorSheet)));
    }

    #[test]
    fn test_out_of_scale_score_is_rejected() {
        let engine = LeverageEngine::new();
        let factors = vec![factor(
            "Roster Need Urgency",
            dec!(101),
            dec!(50),
            Impact::High,
        )];
        assert!(matches!(
            engine.evaluate(target(), factors),
            Err(LeverageError::ScoreOutOfRange(_, _))
        ));
    }

    #[test]
    fn test_full_canonical_sheet_produces_a_consistent_report() {
        let engine = LeverageEngine::new();
        let factors: Vec<LeverageFactor> = NEGOTIATION_DIMENSIONS
            .iter()
            .map(|(name, impact)| factor(name, dec!(65), dec!(45), *impact))
            .collect();

        let report = engine.evaluate(target(), factors).unwrap();

        // Every dimension favors you by 20; the weighted mean is
        // 20 * (3*1.5 + 2*1.0 + 2*0.5) / 7 = 21.43 -> 21.
        assert_eq!(report.factors.len(), 7);
        assert_eq!(report.leverage_score, dec!(21));
        assert_eq!(report.your_leverage, LeverageGrade::Strong);
        // Their position lands at 39, one point under the neutral floor.
        assert_eq!(report.their_leverage, LeverageGrade::Weak);
        assert_eq!(report.overall_advantage, Advantage::You);
        assert!(report.suggested_approach.starts_with("Lowball"));
        assert_eq!(report.deal_likelihood, dec!(66));
    }
}
