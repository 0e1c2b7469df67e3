//! Dashboard aggregation over graded prediction history.

use chrono::{DateTime, Duration, Utc};

use tipster_models::{BetStatus, DashboardStats, PredictionResult, RiskLevel, TierStats};

/// History older than this is ignored by the summary. The persistence
/// boundary owns actual deletion; here it is only a filter.
pub const RETENTION_DAYS: i64 = 30;

/// Pure retention filter: keeps records dated within the last
/// [`RETENTION_DAYS`] relative to `now`.
pub fn prune_history(history: &[PredictionResult], now: DateTime<Utc>) -> Vec<PredictionResult> {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    history.iter().filter(|r| r.date >= cutoff).cloned().collect()
}

/// Summarises graded history into dashboard statistics.
///
/// Only settled records (won or lost) enter the rates; pending and void are
/// excluded. A record counts toward every tier any of its suggestions
/// belongs to, so per-tier totals can exceed the overall total. An empty
/// history reports a win rate of 0, never NaN.
pub fn summarize(history: &[PredictionResult], now: DateTime<Utc>) -> DashboardStats {
    let retained = prune_history(history, now);
    let completed: Vec<&PredictionResult> = retained.iter().filter(|r| r.is_settled()).collect();

    let total = completed.len();
    let won = completed.iter().filter(|r| r.status == BetStatus::Won).count();
    let lost = total - won;
    let win_rate = if total > 0 {
        won as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let tier_stats = |tier: RiskLevel| {
        let in_tier: Vec<&&PredictionResult> =
            completed.iter().filter(|r| r.covers_tier(tier)).collect();
        let tier_won = in_tier.iter().filter(|r| r.status == BetStatus::Won).count();
        TierStats::new(in_tier.len(), tier_won)
    };

    DashboardStats {
        total,
        won,
        lost,
        win_rate,
        conservative: tier_stats(RiskLevel::Conservative),
        medium: tier_stats(RiskLevel::Medium),
        high: tier_stats(RiskLevel::High),
    }
}
