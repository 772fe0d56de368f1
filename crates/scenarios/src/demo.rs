use crate::error::ScenarioError;
use crate::scenario::TradeScenario;
use crate::ScenarioSource;
use chrono::Datelike;
use configuration::DemoSettings;
use core_types::{
    AssetKind, LeverageFactor, NegotiationTarget, TradeAsset, NEGOTIATION_DIMENSIONS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const FIRST_NAMES: [&str; 12] = [
    "Marcus", "Dario", "Keenan", "Rafael", "Tomas", "Jalen", "Cole", "Hiro", "Devin", "Luis",
    "Wyatt", "Andre",
];

const LAST_NAMES: [&str; 12] = [
    "Vaughn", "Okafor", "Brandt", "Segura", "Calloway", "Mori", "Ashford", "Pruitt", "Delgado",
    "Kessler", "Navarro", "Boone",
];

const POSITIONS: [&str; 10] = ["C", "1B", "2B", "3B", "SS", "LF", "CF", "RF", "SP", "RP"];

const PICK_ROUNDS: [&str; 3] = ["1st", "2nd", "3rd"];

/// Fabricates a plausible negotiation from the demo settings.
///
/// The factory is a pure function of its settings: the same seed always
/// yields the identical scenario, rosters and factor sheet included.
/// It exists so the CLI has something to evaluate out of the box; swapping
/// in a real data source means swapping this out.
#[derive(Debug, Clone)]
pub struct DemoScenarioSource {
    settings: DemoSettings,
}

impl DemoScenarioSource {
    pub fn new(settings: DemoSettings) -> Self {
        Self { settings }
    }

    /// Builds the outgoing package: a couple of prospects, sometimes with a
    /// draft pick attached.
    fn outgoing_package(&self, rng: &mut StdRng) -> Vec<TradeAsset> {
        let mut side = vec![
            self.prospect(rng, 35, 60),
            self.prospect(rng, 20, 45),
        ];
        if rng.gen_bool(0.6) {
            side.push(self.draft_pick(rng));
        }
        side
    }

    /// Builds the incoming package: the target player, sometimes with a
    /// depth arm thrown in.
    fn incoming_package(&self, rng: &mut StdRng) -> Vec<TradeAsset> {
        let mut side = vec![TradeAsset {
            name: self.settings.target_player.clone(),
            kind: AssetKind::Player,
            value: Decimal::from(rng.gen_range(60..=90i64)),
            position: self.settings.target_position.clone(),
        }];
        if rng.gen_bool(0.4) {
            side.push(TradeAsset {
                name: self.player_name(rng),
                kind: AssetKind::Player,
                value: Decimal::from(rng.gen_range(10..=25i64)),
                position: "RP".to_string(),
            });
        }
        side
    }

    fn prospect(&self, rng: &mut StdRng, min_value: i64, max_value: i64) -> TradeAsset {
        TradeAsset {
            name: self.player_name(rng),
            kind: AssetKind::Prospect,
            value: Decimal::from(rng.gen_range(min_value..=max_value)),
            position: POSITIONS[rng.gen_range(0..POSITIONS.len())].to_string(),
        }
    }

    fn draft_pick(&self, rng: &mut StdRng) -> TradeAsset {
        let year = self.settings.deadline.year() + rng.gen_range(1..=2);
        let round = PICK_ROUNDS[rng.gen_range(0..PICK_ROUNDS.len())];
        TradeAsset {
            name: format!("{} {} Round Pick", year, round),
            kind: AssetKind::Pick,
            value: Decimal::from(rng.gen_range(15..=40i64)),
            position: "Draft Pick".to_string(),
        }
    }

    fn player_name(&self, rng: &mut StdRng) -> String {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        format!("{} {}", first, last)
    }

    /// Scores the canonical negotiation sheet.
    ///
    /// Most dimensions draw from the 20-95 band. Deadline pressure instead
    /// starts from a base that climbs as the deadline approaches, with
    /// per-side jitter on top.
    fn factor_sheet(&self, rng: &mut StdRng) -> Vec<LeverageFactor> {
        let days_left = (self.settings.deadline - self.settings.as_of).num_days();
        let pressure_base = (95 - days_left * 2).clamp(20, 95);

        NEGOTIATION_DIMENSIONS
            .iter()
            .map(|(name, impact)| {
                let (your_score, their_score) = if *name == "Trade Deadline Pressure" {
                    (
                        (pressure_base + rng.gen_range(-15..=15)).clamp(0, 100),
                        (pressure_base + rng.gen_range(-15..=15)).clamp(0, 100),
                    )
                } else {
                    (rng.gen_range(20..=95), rng.gen_range(20..=95))
                };
                LeverageFactor {
                    factor: name.to_string(),
                    your_score: Decimal::from(your_score),
                    their_score: Decimal::from(their_score),
                    impact: *impact,
                }
            })
            .collect()
    }
}

impl ScenarioSource for DemoScenarioSource {
    fn scenario(&self) -> Result<TradeScenario, ScenarioError> {
        let mut rng = StdRng::seed_from_u64(self.settings.seed);

        let target = NegotiationTarget {
            player: self.settings.target_player.clone(),
            position: self.settings.target_position.clone(),
            your_team: self.settings.your_team.clone(),
            their_team: self.settings.their_team.clone(),
        };

        let side_a = self.outgoing_package(&mut rng);
        let side_b = self.incoming_package(&mut rng);
        let factors = self.factor_sheet(&mut rng);

        tracing::debug!(
            "Generated demo scenario: {} assets out, {} assets in, seed {}",
            side_a.len(),
            side_b.len(),
            self.settings.seed
        );

        Ok(TradeScenario {
            target,
            side_a,
            side_b,
            factors,
        })
    }
}
