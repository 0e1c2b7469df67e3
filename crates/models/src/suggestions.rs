use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered safety/payout tier of a suggestion. Conservative targets
/// confidence 70-90 at odds 1.50-1.70, medium 50-70 at 1.80-2.50, high
/// 35-55 at 2.60-9.50.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Conservative,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Conservative, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Conservative => "conservative",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market kind of a suggestion. The prediction string carries the specific
/// outcome; grading dispatches on this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BetType {
    TotalGoals,
    BothTeamsScore,
    Corners,
    MatchWinner,
    CorrectScore,
    DoubleChance,
    Handicap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Void,
}

/// One candidate betting tip. Immutable once generated; the id is derived
/// from fixture, market and tier so re-running the generator produces the
/// same keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BetSuggestion {
    pub id: String,
    pub fixture_id: u64,
    #[serde(rename = "type")]
    pub bet_type: BetType,
    pub risk_level: RiskLevel,
    pub description: String,
    /// The proposed outcome as shown to subscribers, e.g. "Mais de 2.5 gols".
    pub prediction: String,
    /// Heuristic 0-100 score, not a calibrated probability.
    pub confidence: u8,
    pub reasoning: String,
    /// Illustrative decimal odds for the tier/market.
    pub odds: Option<Decimal>,
}
