use serde::{Deserialize, Serialize};

/// Per-team rolled-up recent performance over a sampled window of matches
/// (commonly the last 10).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSnapshot {
    pub name: String,
    /// One character per sampled match: 'W'/'V' win, 'D'/'E' draw, anything
    /// else counts as a loss. Empty when no recent data is available.
    pub form: String,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
}

impl TeamSnapshot {
    pub fn new(
        name: impl Into<String>,
        form: impl Into<String>,
        goals_scored: u32,
        goals_conceded: u32,
        sample_size: u32,
    ) -> Self {
        let (avg_scored, avg_conceded) = if sample_size == 0 {
            (0.0, 0.0)
        } else {
            (
                f64::from(goals_scored) / f64::from(sample_size),
                f64::from(goals_conceded) / f64::from(sample_size),
            )
        };

        Self {
            name: name.into(),
            form: form.into(),
            goals_scored,
            goals_conceded,
            avg_goals_scored: avg_scored,
            avg_goals_conceded: avg_conceded,
        }
    }

    /// League-table style points over the sampled form: win 3, draw 1, loss 0.
    /// Accepts both English and Portuguese outcome letters.
    pub fn form_points(&self) -> u32 {
        self.form
            .chars()
            .map(|c| match c {
                'W' | 'V' => 3,
                'D' | 'E' => 1,
                _ => 0,
            })
            .sum()
    }

    /// Fraction of sampled matches that were not lost. Zero signal when the
    /// form string is empty.
    pub fn undefeated_rate(&self) -> f64 {
        let sampled = self.form.chars().count();
        if sampled == 0 {
            return 0.0;
        }

        let undefeated = self
            .form
            .chars()
            .filter(|c| matches!(c, 'W' | 'V' | 'D' | 'E'))
            .count();

        undefeated as f64 / sampled as f64
    }

    /// Form points normalised against the maximum attainable (3 per match).
    pub fn win_rate(&self) -> f64 {
        let sampled = self.form.chars().count();
        if sampled == 0 {
            return 0.0;
        }

        f64::from(self.form_points()) / (3.0 * sampled as f64)
    }
}

/// Aggregate of historical direct meetings between the two teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeadToHeadSnapshot {
    pub total_matches: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
    pub avg_goals: f64,
}

impl HeadToHeadSnapshot {
    pub fn new(total_matches: u32, home_wins: u32, away_wins: u32, draws: u32, avg_goals: f64) -> Self {
        Self {
            total_matches,
            home_wins,
            away_wins,
            draws,
            avg_goals,
        }
    }

    /// Neutral fallback for pairings with no recorded meetings, so callers
    /// never have to pass missing data into the engine.
    pub fn neutral() -> Self {
        Self {
            total_matches: 0,
            home_wins: 0,
            away_wins: 0,
            draws: 0,
            avg_goals: 1.35,
        }
    }
}

/// The unit of input to the suggestion generator. Always fully populated;
/// callers substitute neutral values when real data is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchAnalysis {
    pub fixture_id: u64,
    pub home_team: TeamSnapshot,
    pub away_team: TeamSnapshot,
    pub h2h: HeadToHeadSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages_guard_zero_sample() {
        let team = TeamSnapshot::new("Fulham", "", 0, 0, 0);
        assert_eq!(team.avg_goals_scored, 0.0);
        assert_eq!(team.avg_goals_conceded, 0.0);
    }

    #[test]
    fn test_form_points_accepts_both_alphabets() {
        let english = TeamSnapshot::new("Arsenal", "WWDLL", 8, 5, 5);
        let portuguese = TeamSnapshot::new("Flamengo", "VVEDD", 8, 5, 5);
        assert_eq!(english.form_points(), 7);
        // V=3, V=3, E=1, D=1, D=1
        assert_eq!(portuguese.form_points(), 9);
    }

    #[test]
    fn test_undefeated_rate() {
        let team = TeamSnapshot::new("Chelsea", "WWDLL", 8, 5, 5);
        assert!((team.undefeated_rate() - 0.6).abs() < f64::EPSILON);

        let no_data = TeamSnapshot::new("Chelsea", "", 0, 0, 0);
        assert_eq!(no_data.undefeated_rate(), 0.0);
    }

    #[test]
    fn test_win_rate_normalisation() {
        // 5 wins out of 5 = 15 points of a possible 15.
        let perfect = TeamSnapshot::new("Liverpool", "WWWWW", 12, 2, 5);
        assert!((perfect.win_rate() - 1.0).abs() < f64::EPSILON);

        // 2 wins, 1 draw out of 5 = 7 of 15.
        let mixed = TeamSnapshot::new("Everton", "WWDLL", 7, 7, 5);
        assert!((mixed.win_rate() - 7.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_h2h_stays_in_fallback_band() {
        let h2h = HeadToHeadSnapshot::neutral();
        assert_eq!(h2h.total_matches, 0);
        assert!(h2h.avg_goals >= 1.2 && h2h.avg_goals <= 1.5);
    }
}
