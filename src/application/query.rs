//! Search, filter and sort over the normalized prop list.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::normalize::best_price;
use crate::domain::{odds::Side, prop::PlayerProp};

/// Ordering applied to the prop list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Player name, lexicographic.
    #[default]
    Name,
    /// Best "Over" price, highest first. A missing price counts as zero.
    BestOver,
}

impl SortMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BestOver => "best-over",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "name" => Ok(Self::Name),
            "best-over" | "price" => Ok(Self::BestOver),
            other => Err(format!("unknown sort mode '{other}' (expected name or best-over)")),
        }
    }
}

/// A search/sort request over one stat type's props.
#[derive(Debug, Clone, Copy)]
pub struct PropQuery<'a> {
    pub search: &'a str,
    pub sort: SortMode,
    /// Market key the props were built for.
    pub market_key: &'a str,
    /// Bookmakers shown; best prices only consider these.
    pub selected: Option<&'a [String]>,
}

/// Case-insensitive substring match on player or team. An empty query keeps
/// everything.
#[must_use]
pub fn filter<'a>(props: &'a [PlayerProp], search: &str) -> Vec<&'a PlayerProp> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return props.iter().collect();
    }
    props
        .iter()
        .filter(|prop| {
            prop.player.to_lowercase().contains(&needle)
                || prop.team.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort in place (stable). Names compare case-insensitively, like [`filter`].
pub fn sort(props: &mut [&PlayerProp], mode: SortMode, market_key: &str, selected: Option<&[String]>) {
    match mode {
        SortMode::Name => props.sort_by_cached_key(|prop| prop.player.to_lowercase()),
        SortMode::BestOver => props.sort_by_cached_key(|prop| {
            let price = best_price(prop, market_key, Side::Over, selected)
                .map_or(0, |best| best.price.value());
            std::cmp::Reverse(price)
        }),
    }
}

/// Filter then sort.
#[must_use]
pub fn apply<'a>(props: &'a [PlayerProp], query: &PropQuery<'_>) -> Vec<&'a PlayerProp> {
    let mut view = filter(props, query.search);
    sort(&mut view, query.sort, query.market_key, query.selected);
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::odds::{Market, Outcome};
    use crate::domain::prop::PropBook;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn prop(player: &str, team: &str, over: Option<i32>) -> PlayerProp {
        let outcomes = over
            .map(|price| vec![Outcome::new(Side::Over, dec!(10.5), price, Some(player.into()))])
            .unwrap_or_default();
        PlayerProp {
            player: player.into(),
            team: team.into(),
            stat_type: "player_points".into(),
            line: dec!(10.5),
            bookmakers: vec![PropBook {
                key: "draftkings".into(),
                title: "DraftKings".into(),
                last_update: Utc::now(),
                markets: vec![Market::new("player_points", outcomes)],
            }],
        }
    }

    fn names(view: &[&PlayerProp]) -> Vec<String> {
        view.iter().map(|p| p.player.clone()).collect()
    }

    #[test]
    fn filter_matches_player_or_team_case_insensitively() {
        let props = vec![
            prop("Jayson Tatum", "Boston Celtics", Some(100)),
            prop("Jalen Brunson", "New York Knicks", Some(100)),
        ];
        assert_eq!(names(&filter(&props, "TATUM")), vec!["Jayson Tatum"]);
        assert_eq!(names(&filter(&props, "knicks")), vec!["Jalen Brunson"]);
        assert!(filter(&props, "lakers").is_empty());
        assert_eq!(filter(&props, "  ").len(), 2);
    }

    #[test]
    fn sort_by_name_is_lexicographic() {
        let props = vec![prop("b", "t", None), prop("a", "t", None), prop("c", "t", None)];
        let query = PropQuery {
            search: "",
            sort: SortMode::Name,
            market_key: "player_points",
            selected: None,
        };
        assert_eq!(names(&apply(&props, &query)), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let props = vec![
            prop("Zach LaVine", "t", None),
            prop("de'Aaron Fox", "t", None),
            prop("Anthony Davis", "t", None),
        ];
        let query = PropQuery {
            search: "",
            sort: SortMode::Name,
            market_key: "player_points",
            selected: None,
        };
        assert_eq!(
            names(&apply(&props, &query)),
            vec!["Anthony Davis", "de'Aaron Fox", "Zach LaVine"]
        );
    }

    #[test]
    fn sort_by_best_over_is_raw_numeric_descending() {
        let props = vec![
            prop("neg", "t", Some(-150)),
            prop("missing", "t", None),
            prop("pos", "t", Some(120)),
        ];
        let query = PropQuery {
            search: "",
            sort: SortMode::BestOver,
            market_key: "player_points",
            selected: None,
        };
        // Missing counts as zero, so it sits between positive and negative.
        assert_eq!(names(&apply(&props, &query)), vec!["pos", "missing", "neg"]);
    }

    #[test]
    fn sort_mode_parses_aliases() {
        assert_eq!("best_over".parse::<SortMode>().unwrap(), SortMode::BestOver);
        assert_eq!("Name".parse::<SortMode>().unwrap(), SortMode::Name);
        assert!("odds".parse::<SortMode>().is_err());
        assert_eq!(SortMode::BestOver.to_string(), "best-over");
    }

    #[test]
    fn line_zero_prop_still_filters() {
        let mut p = prop("Zed", "Team", None);
        p.line = Decimal::ZERO;
        assert_eq!(filter(std::slice::from_ref(&p), "zed").len(), 1);
    }
}
