use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Leverage score above which you can open with an aggressive offer.
pub const LOWBALL_SCORE_FLOOR: Decimal = dec!(10);

/// Leverage score below which the other side holds the cards.
pub const PREMIUM_SCORE_CEILING: Decimal = dec!(-10);

/// Bounds of the deal-likelihood estimate, in whole percent.
pub const LIKELIHOOD_FLOOR: Decimal = dec!(35);
pub const LIKELIHOOD_CEILING: Decimal = dec!(75);

const LIKELIHOOD_BASELINE: Decimal = dec!(55);

/// A suggested negotiating posture and how likely the deal is to close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub suggested_approach: String,
    pub deal_likelihood: Decimal,
}

/// Turns a signed leverage score into a human-readable suggested approach
/// and a deal-likelihood estimate.
///
/// The approach tiers are evaluated in order, first match wins. Likelihood
/// scales with leverage: the more the other side needs the deal, the more
/// likely it closes. It is clamped to [35, 75] so no negotiation ever reads
/// as a sure thing in either direction.
pub fn recommend(leverage_score: Decimal) -> Recommendation {
    let suggested_approach = if leverage_score > LOWBALL_SCORE_FLOOR {
        "Lowball initial offer. They need to sell."
    } else if leverage_score > Decimal::ZERO {
        "Fair offer with slight discount. You have modest leverage."
    } else if leverage_score > PREMIUM_SCORE_CEILING {
        "Competitive offer needed. Leverage is balanced."
    } else {
        "Premium package required. They hold the cards."
    };

    let deal_likelihood = (LIKELIHOOD_BASELINE + leverage_score / dec!(2))
        .round()
        .clamp(LIKELIHOOD_FLOOR, LIKELIHOOD_CEILING);

    Recommendation {
        suggested_approach: suggested_approach.to_string(),
        deal_likelihood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_tiers_first_match_wins() {
        assert!(recommend(dec!(11)).suggested_approach.starts_with("Lowball"));
        // Exactly 10 misses the lowball tier; the boundary is strict.
        assert!(recommend(dec!(10))
            .suggested_approach
            .starts_with("Fair offer"));
        assert!(recommend(dec!(1)).suggested_approach.starts_with("Fair offer"));
        assert!(recommend(dec!(0))
            .suggested_approach
            .starts_with("Competitive"));
        assert!(recommend(dec!(-9))
            .suggested_approach
            .starts_with("Competitive"));
        assert!(recommend(dec!(-10))
            .suggested_approach
            .starts_with("Premium"));
    }

    #[test]
    fn test_likelihood_tracks_leverage() {
        assert_eq!(recommend(dec!(0)).deal_likelihood, dec!(55));
        assert_eq!(recommend(dec!(10)).deal_likelihood, dec!(60));
        assert_eq!(recommend(dec!(-20)).deal_likelihood, dec!(45));
    }

    #[test]
    fn test_likelihood_is_clamped() {
        assert_eq!(recommend(dec!(80)).deal_likelihood, LIKELIHOOD_CEILING);
        assert_eq!(recommend(dec!(-80)).deal_likelihood, LIKELIHOOD_FLOOR);
    }
}
