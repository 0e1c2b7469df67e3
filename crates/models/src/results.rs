use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::suggestions::{BetStatus, BetSuggestion, RiskLevel};

/// Full-time result of a concluded fixture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalScore {
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corners: Option<u32>,
}

impl FinalScore {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
            corners: None,
        }
    }

    pub fn with_corners(mut self, corners: u32) -> Self {
        self.corners = Some(corners);
        self
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals + self.away_goals
    }
}

/// Persisted grading record for one fixture: the suggestions generated for
/// it, the settled status once the match concluded, and the final score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub fixture_id: u64,
    pub suggestions: Vec<BetSuggestion>,
    pub status: BetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FinalScore>,
    pub date: DateTime<Utc>,
}

impl PredictionResult {
    pub fn pending(fixture_id: u64, suggestions: Vec<BetSuggestion>, date: DateTime<Utc>) -> Self {
        Self {
            fixture_id,
            suggestions,
            status: BetStatus::Pending,
            result: None,
            date,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, BetStatus::Won | BetStatus::Lost)
    }

    /// Whether any of the record's suggestions belongs to the given tier.
    /// A record with suggestions in several tiers counts toward each of them.
    pub fn covers_tier(&self, tier: RiskLevel) -> bool {
        self.suggestions.iter().any(|s| s.risk_level == tier)
    }
}

/// Win/loss summary for a single risk tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TierStats {
    pub total: usize,
    pub won: usize,
    pub win_rate: f64,
}

impl TierStats {
    pub fn new(total: usize, won: usize) -> Self {
        let win_rate = if total > 0 {
            won as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self { total, won, win_rate }
    }

    /// One-decimal percentage as shown on the dashboard, e.g. "60.0".
    pub fn win_rate_display(&self) -> String {
        format!("{:.1}", self.win_rate)
    }
}

/// Dashboard summary over graded history. `win_rate` is always a number,
/// never NaN; an empty history reports 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub conservative: TierStats,
    pub medium: TierStats,
    pub high: TierStats,
}

impl DashboardStats {
    pub fn win_rate_display(&self) -> String {
        format!("{:.1}", self.win_rate)
    }

    pub fn tier(&self, tier: RiskLevel) -> &TierStats {
        match tier {
            RiskLevel::Conservative => &self.conservative,
            RiskLevel::Medium => &self.medium,
            RiskLevel::High => &self.high,
        }
    }
}
