//! Rule-based betting suggestion generation.
//!
//! Pure and deterministic: the same `MatchAnalysis` always yields the same
//! suggestion list, in fixed rule order. Each tier runs its own battery of
//! independent rules; several may fire, and a tier may also produce nothing,
//! in which case callers apply [`fill_missing_tiers`] so the dashboard always
//! has one tip per risk level.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use tipster_models::{BetSuggestion, BetType, MatchAnalysis, RiskLevel};

/// Quantities every rule shares, computed once per analysis.
struct Derived {
    total_avg_goals: f64,
    defensive_strength: f64,
    home_form_points: u32,
    away_form_points: u32,
    /// Home form points minus away form points.
    form_diff: i64,
    home_undefeated_rate: f64,
    away_undefeated_rate: f64,
    home_win_rate: f64,
    away_win_rate: f64,
    home_scoring_rate: f64,
    away_scoring_rate: f64,
    both_score_rate: f64,
}

impl Derived {
    fn from_analysis(analysis: &MatchAnalysis) -> Self {
        let home = &analysis.home_team;
        let away = &analysis.away_team;

        let home_form_points = home.form_points();
        let away_form_points = away.form_points();

        // Heuristic scoring reliability blend: a side averaging at least a
        // goal (0.8 away) is treated as scoring in 75% (70%) of its matches.
        let home_scoring_rate = if home.avg_goals_scored >= 1.0 { 0.75 } else { 0.50 };
        let away_scoring_rate = if away.avg_goals_scored >= 0.8 { 0.70 } else { 0.45 };

        Self {
            total_avg_goals: home.avg_goals_scored + away.avg_goals_scored,
            defensive_strength: (home.avg_goals_conceded + away.avg_goals_conceded) / 2.0,
            home_form_points,
            away_form_points,
            form_diff: i64::from(home_form_points) - i64::from(away_form_points),
            home_undefeated_rate: home.undefeated_rate(),
            away_undefeated_rate: away.undefeated_rate(),
            home_win_rate: home.win_rate(),
            away_win_rate: away.win_rate(),
            home_scoring_rate,
            away_scoring_rate,
            both_score_rate: (home_scoring_rate + away_scoring_rate) / 2.0,
        }
    }
}

/// Round to the nearest integer, then cap. All rule inputs are non-negative,
/// so the result always lands in 0..=cap.
fn confidence(cap: u8, raw: f64) -> u8 {
    let rounded = raw.round();
    if rounded <= 0.0 {
        0
    } else if rounded >= f64::from(cap) {
        cap
    } else {
        rounded as u8
    }
}

#[allow(clippy::too_many_arguments)]
fn suggestion(
    analysis: &MatchAnalysis,
    slug: &str,
    bet_type: BetType,
    risk_level: RiskLevel,
    description: &str,
    prediction: String,
    odds: Decimal,
    conf: u8,
    reasoning: String,
) -> BetSuggestion {
    BetSuggestion {
        id: format!("{}-{}", analysis.fixture_id, slug),
        fixture_id: analysis.fixture_id,
        bet_type,
        risk_level,
        description: description.to_string(),
        prediction,
        confidence: conf,
        reasoning,
        odds: Some(odds),
    }
}

/// Applies the full rule battery and returns the fired suggestions in rule
/// order: conservative, then medium, then high. Tiers may come back empty;
/// see [`fill_missing_tiers`].
pub fn generate_bet_suggestions(analysis: &MatchAnalysis) -> Vec<BetSuggestion> {
    let d = Derived::from_analysis(analysis);
    let mut suggestions = Vec::new();

    conservative_tier(analysis, &d, &mut suggestions);
    medium_tier(analysis, &d, &mut suggestions);
    high_tier(analysis, &d, &mut suggestions);

    debug!(
        fixture_id = analysis.fixture_id,
        count = suggestions.len(),
        total_avg_goals = d.total_avg_goals,
        "generated bet suggestions"
    );

    suggestions
}

/// Conservative tier: high assertiveness, odds 1.50-1.70.
fn conservative_tier(analysis: &MatchAnalysis, d: &Derived, out: &mut Vec<BetSuggestion>) {
    let home = &analysis.home_team;
    let away = &analysis.away_team;

    // Combined average above 2.5 makes over 1.5 a safe line.
    if d.total_avg_goals > 2.5 {
        out.push(suggestion(
            analysis,
            "goals-conservative-over",
            BetType::TotalGoals,
            RiskLevel::Conservative,
            "Total de Gols",
            "Mais de 1.5 gols".to_string(),
            dec!(1.50),
            confidence(90, 70.0 + (d.total_avg_goals - 2.5) * 10.0),
            format!(
                "Média combinada de {:.1} gols por jogo. {} marca {:.1} e {} marca {:.1} gols em média.",
                d.total_avg_goals, home.name, home.avg_goals_scored, away.name, away.avg_goals_scored
            ),
        ));
    }

    // Low-scoring pairing: under 3.5.
    if d.total_avg_goals < 2.0 {
        out.push(suggestion(
            analysis,
            "goals-conservative-under",
            BetType::TotalGoals,
            RiskLevel::Conservative,
            "Total de Gols",
            "Menos de 3.5 gols".to_string(),
            dec!(1.55),
            confidence(88, 75.0 + (2.0 - d.total_avg_goals) * 8.0),
            format!(
                "Média baixa de {:.1} gols por jogo. Defesas sólidas: {} sofre {:.1} e {} sofre {:.1} gols.",
                d.total_avg_goals, home.name, home.avg_goals_conceded, away.name, away.avg_goals_conceded
            ),
        ));
    }

    // Double chance when a side is undefeated in over 70% of its sample.
    if d.home_undefeated_rate > 0.70 {
        out.push(suggestion(
            analysis,
            "double-conservative-home",
            BetType::DoubleChance,
            RiskLevel::Conservative,
            "Chance Dupla",
            format!("{} ou Empate", home.name),
            dec!(1.60),
            confidence(85, d.home_undefeated_rate * 100.0),
            format!(
                "{} não perde em {:.0}% dos últimos jogos (forma: {}). Alta consistência jogando em casa.",
                home.name,
                d.home_undefeated_rate * 100.0,
                home.form
            ),
        ));
    }

    if d.away_undefeated_rate > 0.70 {
        out.push(suggestion(
            analysis,
            "double-conservative-away",
            BetType::DoubleChance,
            RiskLevel::Conservative,
            "Chance Dupla",
            format!("{} ou Empate", away.name),
            dec!(1.65),
            confidence(82, d.away_undefeated_rate * 95.0),
            format!(
                "{} não perde em {:.0}% dos últimos jogos (forma: {}). Boa consistência fora de casa.",
                away.name,
                d.away_undefeated_rate * 100.0,
                away.form
            ),
        ));
    }

    // Both teams to score, yes.
    if d.both_score_rate > 0.65 && home.avg_goals_scored >= 1.0 && away.avg_goals_scored >= 0.8 {
        out.push(suggestion(
            analysis,
            "btts-conservative-yes",
            BetType::BothTeamsScore,
            RiskLevel::Conservative,
            "Ambos Marcam",
            "Sim".to_string(),
            dec!(1.70),
            confidence(83, d.both_score_rate * 100.0),
            format!(
                "{} marca em {:.0}% dos jogos (média {:.1}) e {} em {:.0}% (média {:.1}). Ambas defesas concedem gols.",
                home.name,
                d.home_scoring_rate * 100.0,
                home.avg_goals_scored,
                away.name,
                d.away_scoring_rate * 100.0,
                away.avg_goals_scored
            ),
        ));
    }

    // Both teams to score, no.
    if d.both_score_rate < 0.40 && (home.avg_goals_scored < 0.8 || away.avg_goals_scored < 0.8) {
        out.push(suggestion(
            analysis,
            "btts-conservative-no",
            BetType::BothTeamsScore,
            RiskLevel::Conservative,
            "Ambos Marcam",
            "Não".to_string(),
            dec!(1.65),
            confidence(80, (1.0 - d.both_score_rate) * 90.0),
            format!(
                "Pelo menos um time tem dificuldade ofensiva. {} marca {:.1} e {} marca {:.1} gols em média.",
                home.name, home.avg_goals_scored, away.name, away.avg_goals_scored
            ),
        ));
    }

    // Clear home favourite without a handicap.
    if d.form_diff >= 6 && home.avg_goals_scored > away.avg_goals_scored + 0.5 {
        out.push(suggestion(
            analysis,
            "winner-conservative-home",
            BetType::MatchWinner,
            RiskLevel::Conservative,
            "Vencedor da Partida",
            format!("Vitória {}", home.name),
            dec!(1.70),
            confidence(78, 60.0 + d.form_diff as f64 * 2.0),
            format!(
                "{} é favorito claro: forma superior ({} vs {}), melhor ataque ({:.1} vs {:.1}) e vantagem de jogar em casa.",
                home.name, home.form, away.form, home.avg_goals_scored, away.avg_goals_scored
            ),
        ));
    }
}

/// Medium tier: balanced risk/return, odds 1.80-2.50.
fn medium_tier(analysis: &MatchAnalysis, d: &Derived, out: &mut Vec<BetSuggestion>) {
    let home = &analysis.home_team;
    let away = &analysis.away_team;

    if (2.2..=3.2).contains(&d.total_avg_goals) {
        out.push(suggestion(
            analysis,
            "goals-medium-over",
            BetType::TotalGoals,
            RiskLevel::Medium,
            "Total de Gols",
            "Mais de 2.5 gols".to_string(),
            dec!(1.90),
            confidence(70, 50.0 + (d.total_avg_goals - 2.2) * 15.0),
            format!(
                "Média combinada de {:.1} gols. Jogos recentes indicam confrontos equilibrados com gols de ambos os lados.",
                d.total_avg_goals
            ),
        ));
    }

    // Moderate favourites: win rate in the 55-70% band plus a form edge.
    if (0.55..=0.70).contains(&d.home_win_rate) && d.form_diff >= 3 {
        out.push(suggestion(
            analysis,
            "winner-medium-home",
            BetType::MatchWinner,
            RiskLevel::Medium,
            "Vencedor da Partida",
            format!("Vitória {}", home.name),
            dec!(2.10),
            confidence(68, d.home_win_rate * 90.0),
            format!(
                "{} vence {:.0}% dos últimos jogos (forma: {}). Estatísticas favorecem vitória em casa.",
                home.name,
                d.home_win_rate * 100.0,
                home.form
            ),
        ));
    }

    if (0.55..=0.70).contains(&d.away_win_rate) && d.form_diff <= -3 {
        out.push(suggestion(
            analysis,
            "winner-medium-away",
            BetType::MatchWinner,
            RiskLevel::Medium,
            "Vencedor da Partida",
            format!("Vitória {}", away.name),
            dec!(2.40),
            confidence(65, d.away_win_rate * 85.0),
            format!(
                "{} vence {:.0}% dos últimos jogos (forma: {}). Boa performance fora de casa.",
                away.name,
                d.away_win_rate * 100.0,
                away.form
            ),
        ));
    }

    if (0.50..=0.65).contains(&d.both_score_rate) {
        out.push(suggestion(
            analysis,
            "btts-medium",
            BetType::BothTeamsScore,
            RiskLevel::Medium,
            "Ambos Marcam",
            "Sim".to_string(),
            dec!(1.95),
            confidence(65, d.both_score_rate * 95.0),
            format!(
                "Padrão regular de ambos marcarem ({:.0}% dos jogos). {} marca {:.1} e {} marca {:.1} gols.",
                d.both_score_rate * 100.0,
                home.name,
                home.avg_goals_scored,
                away.name,
                away.avg_goals_scored
            ),
        ));
    }

    // Leaky defences plus productive attacks push the goal line up.
    if d.defensive_strength >= 1.5 && d.total_avg_goals >= 2.5 {
        out.push(suggestion(
            analysis,
            "goals-medium-high",
            BetType::TotalGoals,
            RiskLevel::Medium,
            "Total de Gols",
            "Mais de 3.5 gols".to_string(),
            dec!(2.20),
            confidence(68, (d.defensive_strength / 2.0) * 100.0),
            format!(
                "Defesas vulneráveis (média de {:.1} gols sofridos) e ataques produtivos (média de {:.1} gols). Jogo aberto esperado.",
                d.defensive_strength, d.total_avg_goals
            ),
        ));
    }

    // Small Asian handicap on a clear favourite.
    if d.form_diff >= 5 && home.avg_goals_scored > away.avg_goals_scored + 0.8 {
        out.push(suggestion(
            analysis,
            "handicap-medium-home",
            BetType::Handicap,
            RiskLevel::Medium,
            "Handicap Asiático",
            format!("{} -0.5", home.name),
            dec!(2.05),
            confidence(62, 55.0 + d.form_diff as f64 * 1.5),
            format!(
                "{} é favorito com boa margem (forma {}). Média de {:.1} gols marcados vs {:.1} sofridos pelo adversário.",
                home.name, home.form, home.avg_goals_scored, away.avg_goals_conceded
            ),
        ));
    }
}

/// High tier: unlikely scenarios, odds 2.60-9.50.
fn high_tier(analysis: &MatchAnalysis, d: &Derived, out: &mut Vec<BetSuggestion>) {
    let home = &analysis.home_team;
    let away = &analysis.away_team;

    if d.total_avg_goals > 3.0 {
        let over_confidence = confidence(55, (d.total_avg_goals / 4.0) * 70.0);
        out.push(suggestion(
            analysis,
            "goals-high-over",
            BetType::TotalGoals,
            RiskLevel::High,
            "Total de Gols",
            "Mais de 3.5 gols".to_string(),
            dec!(2.80),
            over_confidence,
            format!(
                "Média muito alta de {:.1} gols por jogo. Ambos ataques produtivos e defesas frágeis indicam jogo com muitos gols.",
                d.total_avg_goals
            ),
        ));

        if d.total_avg_goals > 3.5 {
            out.push(suggestion(
                analysis,
                "goals-high-over-extreme",
                BetType::TotalGoals,
                RiskLevel::High,
                "Total de Gols",
                "Mais de 4.5 gols".to_string(),
                dec!(4.50),
                over_confidence.saturating_sub(10).min(45),
                format!(
                    "Média extremamente alta de {:.1} gols. Histórico recente mostra jogos abertos com muitos gols.",
                    d.total_avg_goals
                ),
            ));
        }
    }

    // Away upset: visitor on the rise while the favourite slumps.
    if i64::from(d.away_form_points) > i64::from(d.home_form_points) + 3
        && d.away_win_rate >= 0.50
        && d.home_win_rate < 0.40
    {
        out.push(suggestion(
            analysis,
            "winner-high-upset",
            BetType::MatchWinner,
            RiskLevel::High,
            "Vitória da Zebra",
            format!("Vitória {}", away.name),
            dec!(3.80),
            confidence(50, 40.0 + (i64::from(d.away_form_points) - i64::from(d.home_form_points)) as f64),
            format!(
                "{} em ascensão (forma: {}) enquanto {} está em queda (forma: {}). Zebra com valor estatístico.",
                away.name, away.form, home.name, home.form
            ),
        ));
    }

    // Favourite expected to win by a margin.
    let home_goal_difference = home.avg_goals_scored - away.avg_goals_conceded;
    if home_goal_difference >= 1.5 && d.home_form_points >= 10 {
        out.push(suggestion(
            analysis,
            "handicap-high-home",
            BetType::Handicap,
            RiskLevel::High,
            "Handicap Europeu",
            format!("{} -1.5", home.name),
            dec!(3.20),
            confidence(52, 35.0 + home_goal_difference * 10.0),
            format!(
                "{} tem ataque forte ({:.1} gols) contra defesa fraca ({:.1} sofridos). Histórico indica vitórias com margem.",
                home.name, home.avg_goals_scored, away.avg_goals_conceded
            ),
        ));
    }

    // Exact score from rounded goal averages. Unconditional: this is the
    // guaranteed high-tier suggestion for every fixture.
    let predicted_home = (home.avg_goals_scored.round() as i64).clamp(0, 4);
    let predicted_away = (away.avg_goals_scored.round() as i64).clamp(0, 4);
    out.push(suggestion(
        analysis,
        "score-high-exact",
        BetType::CorrectScore,
        RiskLevel::High,
        "Placar Exato",
        format!("{predicted_home}-{predicted_away}"),
        dec!(9.50),
        confidence(42, 25.0 + (home.avg_goals_scored + away.avg_goals_scored) * 4.0),
        format!(
            "Baseado nas médias de gols: {} marca {:.1} e {} marca {:.1} por jogo. Padrão estatístico aponta para este placar.",
            home.name, home.avg_goals_scored, away.name, away.avg_goals_scored
        ),
    ));

    // Combined both-score and goal line.
    if d.both_score_rate >= 0.60 && d.total_avg_goals >= 2.8 {
        out.push(suggestion(
            analysis,
            "combo-high-btts-goals",
            BetType::BothTeamsScore,
            RiskLevel::High,
            "Ambos Marcam + Total de Gols",
            "Sim + Mais de 2.5 gols".to_string(),
            dec!(3.40),
            confidence(48, d.both_score_rate * 60.0 + (d.total_avg_goals / 4.0) * 20.0),
            format!(
                "Combinação de ambos marcarem ({:.0}% dos jogos) com média alta de {:.1} gols. Jogo ofensivo esperado.",
                d.both_score_rate * 100.0,
                d.total_avg_goals
            ),
        ));
    }

    // Open matches produce corners.
    if d.total_avg_goals >= 2.5 && d.defensive_strength >= 1.2 {
        out.push(suggestion(
            analysis,
            "corners-high",
            BetType::Corners,
            RiskLevel::High,
            "Total de Escanteios",
            "Mais de 10.5 escanteios".to_string(),
            dec!(2.60),
            confidence(50, (d.total_avg_goals / 3.5) * 65.0),
            format!(
                "Jogos ofensivos (média de {:.1} gols) geram mais escanteios. Times pressionam constantemente e criam oportunidades.",
                d.total_avg_goals
            ),
        ));
    }
}

/// Fallback policy: synthesize exactly one suggestion for every tier the
/// rule battery left empty, using only the goal averages. Guarantees at
/// least one tip per risk level for every fixture.
pub fn fill_missing_tiers(analysis: &MatchAnalysis, suggestions: &mut Vec<BetSuggestion>) {
    for tier in RiskLevel::ALL {
        if suggestions.iter().any(|s| s.risk_level == tier) {
            continue;
        }
        debug!(
            fixture_id = analysis.fixture_id,
            tier = %tier,
            "no rule fired for tier, synthesizing fallback"
        );
        suggestions.push(fallback_for_tier(analysis, tier));
    }
}

fn fallback_for_tier(analysis: &MatchAnalysis, tier: RiskLevel) -> BetSuggestion {
    let home = &analysis.home_team;
    let away = &analysis.away_team;
    let total_avg_goals = home.avg_goals_scored + away.avg_goals_scored;

    match tier {
        RiskLevel::Conservative => {
            let both_score = home.avg_goals_scored > 0.8 && away.avg_goals_scored > 0.8;
            suggestion(
                analysis,
                "btts-conservative-fallback",
                BetType::BothTeamsScore,
                RiskLevel::Conservative,
                "Ambos Marcam",
                if both_score { "Sim" } else { "Não" }.to_string(),
                dec!(1.70),
                72,
                format!(
                    "Sugestão baseada apenas nas médias de gols: {} marca {:.1} e {} marca {:.1} por jogo.",
                    home.name, home.avg_goals_scored, away.name, away.avg_goals_scored
                ),
            )
        }
        RiskLevel::Medium => {
            let over = total_avg_goals > 2.5;
            suggestion(
                analysis,
                "goals-medium-fallback",
                BetType::TotalGoals,
                RiskLevel::Medium,
                "Total de Gols",
                if over { "Mais de 2.5 gols" } else { "Menos de 2.5 gols" }.to_string(),
                dec!(1.90),
                55,
                format!("Média combinada de {total_avg_goals:.1} gols por jogo."),
            )
        }
        RiskLevel::High => {
            let predicted_home = (home.avg_goals_scored.round() as i64).clamp(0, 4);
            let predicted_away = (away.avg_goals_scored.round() as i64).clamp(0, 4);
            suggestion(
                analysis,
                "score-high-fallback",
                BetType::CorrectScore,
                RiskLevel::High,
                "Placar Exato",
                format!("{predicted_home}-{predicted_away}"),
                dec!(9.50),
                30,
                format!(
                    "Palpite de placar a partir das médias arredondadas de {} e {}.",
                    home.name, away.name
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipster_models::{HeadToHeadSnapshot, TeamSnapshot};

    fn analysis(home: TeamSnapshot, away: TeamSnapshot) -> MatchAnalysis {
        MatchAnalysis {
            fixture_id: 9001,
            home_team: home,
            away_team: away,
            h2h: HeadToHeadSnapshot::neutral(),
        }
    }

    fn team(name: &str, form: &str, scored: u32, conceded: u32) -> TeamSnapshot {
        TeamSnapshot::new(name, form, scored, conceded, 10)
    }

    #[test]
    fn test_high_scoring_pairing_fires_conservative_over() {
        // home 2.0/0.5, away 1.8/0.6 -> total 3.8
        let a = analysis(team("Man City", "WWWDW", 20, 5), team("Liverpool", "WWDWL", 18, 6));
        let suggestions = generate_bet_suggestions(&a);

        let over = suggestions
            .iter()
            .find(|s| s.id.ends_with("goals-conservative-over"))
            .expect("over 1.5 suggestion");
        assert_eq!(over.prediction, "Mais de 1.5 gols");
        assert_eq!(over.risk_level, RiskLevel::Conservative);
        // 70 + (3.8 - 2.5) * 10 = 83, under the 90 cap.
        assert_eq!(over.confidence, 83);
    }

    #[test]
    fn test_undefeated_home_gets_double_chance() {
        let a = analysis(team("Palmeiras", "WWWWW", 12, 3), team("Coritiba", "LLLLL", 4, 14));
        let suggestions = generate_bet_suggestions(&a);

        let double = suggestions
            .iter()
            .find(|s| s.bet_type == BetType::DoubleChance)
            .expect("double chance suggestion");
        assert_eq!(double.prediction, "Palmeiras ou Empate");
        // min(85, 1.0 * 100) = 85
        assert_eq!(double.confidence, 85);

        // 0 away form points is not greater than 15 + 3: no upset call.
        assert!(!suggestions.iter().any(|s| s.id.ends_with("winner-high-upset")));
    }

    #[test]
    fn test_generator_is_deterministic() {
        let a = analysis(team("Ajax", "WDWLW", 17, 9), team("PSV", "WWDDL", 15, 11));
        let first = generate_bet_suggestions(&a);
        let second = generate_bet_suggestions(&a);
        assert_eq!(first, second);
    }

    #[test]
    fn test_correct_score_is_always_present() {
        let quiet = analysis(team("Getafe", "DLLDL", 4, 6), team("Cadiz", "LDLDL", 3, 7));
        let busy = analysis(team("Bayern", "WWWWW", 28, 8), team("Dortmund", "WWLWW", 24, 12));

        for a in [quiet, busy] {
            let suggestions = generate_bet_suggestions(&a);
            let score = suggestions
                .iter()
                .filter(|s| s.bet_type == BetType::CorrectScore)
                .collect::<Vec<_>>();
            assert_eq!(score.len(), 1);
            assert_eq!(score[0].risk_level, RiskLevel::High);
        }
    }

    #[test]
    fn test_correct_score_prediction_is_clamped() {
        // 5.2 goals per game rounds to 5, clamped to 4.
        let a = analysis(team("Goleada FC", "WWWWW", 52, 2), team("Lanterna", "LLLLL", 1, 40));
        let suggestions = generate_bet_suggestions(&a);
        let score = suggestions
            .iter()
            .find(|s| s.bet_type == BetType::CorrectScore)
            .unwrap();
        assert_eq!(score.prediction, "4-0");
    }

    #[test]
    fn test_extreme_goal_average_emits_two_high_overs() {
        // total 4.2 > 3.5: both the 3.5 and the 4.5 line fire.
        let a = analysis(team("Ataque", "WWWWD", 24, 15), team("Defesa Nao", "WLWLW", 18, 16));
        let suggestions = generate_bet_suggestions(&a);

        let over = suggestions.iter().find(|s| s.id.ends_with("goals-high-over")).unwrap();
        let extreme = suggestions
            .iter()
            .find(|s| s.id.ends_with("goals-high-over-extreme"))
            .unwrap();
        // min(55, 4.2/4*70) = min(55, 73.5) = 55; extreme = min(45, 55-10).
        assert_eq!(over.confidence, 55);
        assert_eq!(extreme.confidence, 45);
        assert_eq!(extreme.prediction, "Mais de 4.5 gols");
    }

    #[test]
    fn test_confidence_stays_in_bounds() {
        let inputs = [
            analysis(team("A", "WWWWWWWWWW", 40, 0), team("B", "LLLLLLLLLL", 0, 40)),
            analysis(team("C", "", 0, 0), team("D", "", 0, 0)),
            analysis(team("E", "DDDDD", 5, 5), team("F", "DDDDD", 5, 5)),
        ];

        for a in inputs {
            let mut suggestions = generate_bet_suggestions(&a);
            fill_missing_tiers(&a, &mut suggestions);
            for s in &suggestions {
                assert!(s.confidence <= 100, "confidence {} out of range", s.confidence);
            }
        }
    }

    #[test]
    fn test_fallbacks_guarantee_tier_coverage() {
        // No goals, no form: almost nothing fires besides the exact score.
        let a = analysis(team("Sem Dados", "", 0, 0), team("Novato", "", 0, 0));
        let mut suggestions = generate_bet_suggestions(&a);
        fill_missing_tiers(&a, &mut suggestions);

        for tier in RiskLevel::ALL {
            assert!(
                suggestions.iter().any(|s| s.risk_level == tier),
                "missing tier {tier}"
            );
        }

        // High tier already had its unconditional exact score, so no high
        // fallback was added on top of it.
        assert!(!suggestions.iter().any(|s| s.id.ends_with("score-high-fallback")));
    }

    #[test]
    fn test_fallback_ids_are_unique_per_fixture() {
        let a = analysis(team("Sem Dados", "", 0, 0), team("Novato", "", 0, 0));
        let mut suggestions = generate_bet_suggestions(&a);
        fill_missing_tiers(&a, &mut suggestions);

        let mut ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), suggestions.len());
    }

    #[test]
    fn test_medium_handicap_requires_form_and_attack_gap() {
        // form diff 15 >= 5 and attack gap 2.4 - 0.9 > 0.8.
        let a = analysis(team("Favorito", "WWWWW", 24, 6), team("Visitante", "LLLLL", 9, 20));
        let suggestions = generate_bet_suggestions(&a);

        let handicap = suggestions
            .iter()
            .find(|s| s.id.ends_with("handicap-medium-home"))
            .expect("asian handicap");
        assert_eq!(handicap.prediction, "Favorito -0.5");
        // min(62, 55 + 15 * 1.5) = 62
        assert_eq!(handicap.confidence, 62);
    }

    #[test]
    fn test_away_upset_rule() {
        // away 12 points > home 1 + 3; away win rate 0.8 >= 0.5; home 0.07 < 0.4.
        let a = analysis(team("Queda", "DLLLL", 6, 15), team("Ascensao", "WWWWL", 14, 8));
        let suggestions = generate_bet_suggestions(&a);

        let upset = suggestions
            .iter()
            .find(|s| s.id.ends_with("winner-high-upset"))
            .expect("upset suggestion");
        assert_eq!(upset.prediction, "Vitória Ascensao");
        // min(50, 40 + (12 - 1)) = 50
        assert_eq!(upset.confidence, 50);
    }
}
