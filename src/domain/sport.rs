//! Supported sports and their stat-type (market) vocabularies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;
use super::odds::alternate_key;

/// A player prop category offered for a sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatType {
    /// Provider market key, e.g. `player_points`.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Whether the provider publishes an `_alternate` market with extra lines.
    pub alternates: bool,
}

impl StatType {
    const fn new(key: &'static str, label: &'static str, alternates: bool) -> Self {
        Self {
            key,
            label,
            alternates,
        }
    }

    /// Alternate market key, when the stat type has one.
    #[must_use]
    pub fn alternate_key(&self) -> Option<String> {
        self.alternates.then(|| alternate_key(self.key))
    }

    /// Every market key to request in one call: standard first, then alternate.
    #[must_use]
    pub fn market_keys(&self) -> Vec<String> {
        let mut keys = vec![self.key.to_string()];
        keys.extend(self.alternate_key());
        keys
    }
}

const BASKETBALL: &[StatType] = &[
    StatType::new("player_points", "Points", true),
    StatType::new("player_rebounds", "Rebounds", true),
    StatType::new("player_assists", "Assists", true),
    StatType::new("player_threes", "Threes", true),
    StatType::new("player_points_rebounds_assists", "Pts + Reb + Ast", true),
    StatType::new("player_blocks", "Blocks", true),
    StatType::new("player_steals", "Steals", true),
];

const FOOTBALL: &[StatType] = &[
    StatType::new("player_pass_yds", "Passing Yards", true),
    StatType::new("player_pass_tds", "Passing TDs", true),
    StatType::new("player_pass_completions", "Completions", false),
    StatType::new("player_rush_yds", "Rushing Yards", true),
    StatType::new("player_receptions", "Receptions", true),
    StatType::new("player_reception_yds", "Receiving Yards", true),
];

const BASEBALL: &[StatType] = &[
    StatType::new("batter_hits", "Hits", true),
    StatType::new("batter_total_bases", "Total Bases", true),
    StatType::new("batter_home_runs", "Home Runs", true),
    StatType::new("batter_rbis", "RBIs", true),
    StatType::new("batter_runs_scored", "Runs", false),
    StatType::new("pitcher_strikeouts", "Strikeouts", true),
    StatType::new("pitcher_hits_allowed", "Hits Allowed", true),
    StatType::new("pitcher_outs", "Outs Recorded", false),
];

const HOCKEY: &[StatType] = &[
    StatType::new("player_points", "Points", true),
    StatType::new("player_goals", "Goals", true),
    StatType::new("player_assists", "Assists", true),
    StatType::new("player_shots_on_goal", "Shots on Goal", true),
    StatType::new("player_blocked_shots", "Blocked Shots", true),
    StatType::new("player_total_saves", "Saves", true),
];

/// Sports with player prop coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Nba,
    Wnba,
    Ncaab,
    Wncaab,
    Nfl,
    Ncaaf,
    Mlb,
    Nhl,
}

impl Sport {
    pub const ALL: [Sport; 8] = [
        Sport::Nba,
        Sport::Wnba,
        Sport::Ncaab,
        Sport::Wncaab,
        Sport::Nfl,
        Sport::Ncaaf,
        Sport::Mlb,
        Sport::Nhl,
    ];

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nba => "nba",
            Self::Wnba => "wnba",
            Self::Ncaab => "ncaab",
            Self::Wncaab => "wncaab",
            Self::Nfl => "nfl",
            Self::Ncaaf => "ncaaf",
            Self::Mlb => "mlb",
            Self::Nhl => "nhl",
        }
    }

    /// Provider sport key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nba => "basketball_nba",
            Self::Wnba => "basketball_wnba",
            Self::Ncaab => "basketball_ncaab",
            Self::Wncaab => "basketball_wncaab",
            Self::Nfl => "americanfootball_nfl",
            Self::Ncaaf => "americanfootball_ncaaf",
            Self::Mlb => "baseball_mlb",
            Self::Nhl => "icehockey_nhl",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nba => "NBA",
            Self::Wnba => "WNBA",
            Self::Ncaab => "NCAA Men's Basketball",
            Self::Wncaab => "NCAA Women's Basketball",
            Self::Nfl => "NFL",
            Self::Ncaaf => "NCAA Football",
            Self::Mlb => "MLB",
            Self::Nhl => "NHL",
        }
    }

    /// Stat types offered for this sport. The first entry is the default.
    #[must_use]
    pub const fn stat_types(self) -> &'static [StatType] {
        match self {
            Self::Nba | Self::Wnba | Self::Ncaab | Self::Wncaab => BASKETBALL,
            Self::Nfl | Self::Ncaaf => FOOTBALL,
            Self::Mlb => BASEBALL,
            Self::Nhl => HOCKEY,
        }
    }

    #[must_use]
    pub fn default_stat_type(self) -> &'static StatType {
        &self.stat_types()[0]
    }

    /// Look up a stat type by its standard market key.
    pub fn stat_type(self, key: &str) -> Result<&'static StatType, DomainError> {
        self.stat_types()
            .iter()
            .find(|stat| stat.key == key)
            .ok_or_else(|| DomainError::UnknownStatType {
                sport: self.name(),
                stat: key.to_string(),
            })
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    /// Accepts the short name (`nba`) or the provider key (`basketball_nba`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|sport| sport.name() == wanted || sport.key() == wanted)
            .ok_or_else(|| DomainError::UnknownSport(s.to_string()))
    }
}
