mod config;
mod feed;
mod store;

use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use store::HistoryStore;
use tipster_engine::{check_suggestion, fill_missing_tiers, generate_bet_suggestions, summarize};
use tipster_models::{BetStatus, FinalScore, PredictionResult, RiskLevel};

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tipster_rs=debug,tipster_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🎯 Starting Tipster-RS betting suggestion engine");

    let config = AppConfig::new()?;
    info!("✅ Configuration loaded successfully");
    info!("🗂️  History file: {}", config.history_path());

    let store = HistoryStore::new(config.history_path());
    let fixtures = feed::sample_fixtures();
    let analysed = config.feed.fixture_count.min(fixtures.len());

    for analysis in &fixtures[..analysed] {
        let mut suggestions = generate_bet_suggestions(analysis);
        fill_missing_tiers(analysis, &mut suggestions);

        info!(
            "⚽ {} vs {} — {} suggestions",
            analysis.home_team.name,
            analysis.away_team.name,
            suggestions.len()
        );
        for s in &suggestions {
            info!(
                "   [{}] {}: {} ({}% de confiança)",
                s.risk_level, s.description, s.prediction, s.confidence
            );
        }

        store.upsert(PredictionResult::pending(
            analysis.fixture_id,
            suggestions,
            Utc::now(),
        ))?;
    }

    if config.feed.simulate_results {
        settle_pending_with_simulated_scores(&store)?;
    }

    let stats = summarize(&store.load()?, Utc::now());
    info!(
        "📈 Dashboard: {} settled, {} won, {} lost — win rate {}%",
        stats.total,
        stats.won,
        stats.lost,
        stats.win_rate_display()
    );
    for tier in RiskLevel::ALL {
        let t = stats.tier(tier);
        info!("   {}: {}/{} ({}%)", tier, t.won, t.total, t.win_rate_display());
    }

    info!("👋 Run complete");
    Ok(())
}

/// Rolls a plausible final score for every pending fixture and grades its
/// suggestions. A record settles as won only when every gradeable
/// suggestion came in; any miss loses it, and a record with nothing
/// gradeable is voided.
fn settle_pending_with_simulated_scores(store: &HistoryStore) -> Result<()> {
    let mut rng = rand::thread_rng();
    let pending: Vec<PredictionResult> = store
        .load()?
        .into_iter()
        .filter(|r| r.status == BetStatus::Pending)
        .collect();

    for record in pending {
        let score = FinalScore::new(rng.gen_range(0..=4), rng.gen_range(0..=3))
            .with_corners(rng.gen_range(4..=14));

        let graded: Vec<bool> = record
            .suggestions
            .iter()
            .filter_map(|s| check_suggestion(s, score.home_goals, score.away_goals))
            .collect();

        let status = if graded.is_empty() {
            BetStatus::Void
        } else if graded.iter().all(|&won| won) {
            BetStatus::Won
        } else {
            BetStatus::Lost
        };

        info!(
            "🏁 Fixture {} finished {}-{} → {:?} ({} of {} suggestions gradeable)",
            record.fixture_id,
            score.home_goals,
            score.away_goals,
            status,
            graded.len(),
            record.suggestions.len()
        );

        store.settle(record.fixture_id, status, score)?;
    }

    Ok(())
}
