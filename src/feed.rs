//! Simulated fixture feed.
//!
//! Stands in for the external fixture/statistics provider: each entry is a
//! fully assembled `MatchAnalysis`, the same shape calling code would build
//! from a real provider's recent-match and head-to-head endpoints.

use tipster_models::{HeadToHeadSnapshot, MatchAnalysis, TeamSnapshot};

pub fn sample_fixtures() -> Vec<MatchAnalysis> {
    vec![
        // Attacking home favourite against a leaky defence.
        MatchAnalysis {
            fixture_id: 870_001,
            home_team: TeamSnapshot::new("Flamengo", "WWWDWVWWDW", 22, 8, 10),
            away_team: TeamSnapshot::new("Vasco da Gama", "LDLLWLDLLL", 9, 19, 10),
            h2h: HeadToHeadSnapshot::new(10, 6, 2, 2, 2.9),
        },
        // Two blunt attacks; the under markets should dominate.
        MatchAnalysis {
            fixture_id: 870_002,
            home_team: TeamSnapshot::new("Getafe", "DLDDLDLDWD", 7, 9, 10),
            away_team: TeamSnapshot::new("Cádiz", "LDLDLLDDLL", 6, 12, 10),
            h2h: HeadToHeadSnapshot::new(6, 2, 1, 3, 1.5),
        },
        // Visitor arriving in much better form than the host.
        MatchAnalysis {
            fixture_id: 870_003,
            home_team: TeamSnapshot::new("Botafogo", "LLDLLDLWLL", 8, 16, 10),
            away_team: TeamSnapshot::new("Palmeiras", "WWDWWWLWDW", 19, 7, 10),
            h2h: HeadToHeadSnapshot::new(10, 3, 4, 3, 2.2),
        },
        // Evenly matched open game.
        MatchAnalysis {
            fixture_id: 870_004,
            home_team: TeamSnapshot::new("Arsenal", "WDWLWWDLWW", 18, 12, 10),
            away_team: TeamSnapshot::new("Chelsea", "WLWDWLWDLW", 16, 14, 10),
            h2h: HeadToHeadSnapshot::new(10, 4, 3, 3, 2.7),
        },
        // No data yet for either side; neutral fallbacks everywhere.
        MatchAnalysis {
            fixture_id: 870_005,
            home_team: TeamSnapshot::new("Recém-Promovido", "", 0, 0, 0),
            away_team: TeamSnapshot::new("Estreante FC", "", 0, 0, 0),
            h2h: HeadToHeadSnapshot::neutral(),
        },
    ]
}
