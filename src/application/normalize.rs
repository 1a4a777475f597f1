//! Odds normalization and best-price selection.
//!
//! Reshapes a per-event [`GameOdds`] payload (bookmakers → markets →
//! outcomes) into one [`PlayerProp`] per player, where each attached
//! bookmaker carries a single merged market holding both standard and
//! alternate lines for that player.
//!
//! # Merging
//!
//! Per bookmaker, when the stat type has alternates:
//! - standard and alternate both present: alternate outcomes are appended to
//!   the standard list unless the same bet is already there
//! - only alternate present: it is promoted to the standard key
//!
//! Every merged list is then sorted by line, ascending. Outcomes with no
//! player description are dropped.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::{
    odds::{Bookmaker, GameOdds, Market, Outcome, Side},
    prop::{BestPrice, PlayerProp, PropBook},
    sport::StatType,
};

/// Merge a bookmaker's standard and alternate markets for a stat type.
///
/// Returns `None` when the bookmaker has neither.
#[must_use]
pub fn merge_markets(bookmaker: &Bookmaker, stat: &StatType) -> Option<Market> {
    let standard = bookmaker.market(stat.key);
    let alternate = stat
        .alternate_key()
        .and_then(|key| bookmaker.market(&key));

    let mut merged = match standard {
        Some(standard) => standard.clone(),
        // Alternate-only books are promoted to the standard key.
        None if alternate.is_some() => Market::new(stat.key, Vec::new()),
        None => return None,
    };
    match alternate {
        Some(alternate) => merged.merge(alternate.clone()),
        None => merged.sort_by_point(),
    }
    Some(merged)
}

/// Group a market's outcomes by player, preserving first-seen player order.
fn outcomes_by_player(market: &Market) -> Vec<(String, Vec<Outcome>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<Outcome>)> = Vec::new();

    for outcome in &market.outcomes {
        let Some(player) = outcome.player() else {
            continue;
        };
        match index.get(player) {
            Some(&i) => grouped[i].1.push(outcome.clone()),
            None => {
                index.insert(player, grouped.len());
                grouped.push((player.to_string(), vec![outcome.clone()]));
            }
        }
    }

    grouped
}

/// Build the per-player prop list for one stat type.
///
/// One entry per distinct player with at least one attributable outcome. A
/// player seen again at a later bookmaker gets that bookmaker appended to
/// the existing entry.
#[must_use]
pub fn normalize(odds: &GameOdds, stat: &StatType) -> Vec<PlayerProp> {
    let mut props: Vec<PlayerProp> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for bookmaker in &odds.bookmakers {
        let Some(market) = merge_markets(bookmaker, stat) else {
            trace!(bookmaker = %bookmaker.key, stat = stat.key, "No market for stat type");
            continue;
        };

        for (player, outcomes) in outcomes_by_player(&market) {
            let book = PropBook {
                key: bookmaker.key.clone(),
                title: bookmaker.title.clone(),
                last_update: bookmaker.last_update,
                markets: vec![Market {
                    key: market.key.clone(),
                    outcomes,
                }],
            };

            if let Some(&i) = index.get(&player) {
                props[i].bookmakers.push(book);
                continue;
            }

            let line = book.markets[0]
                .first(Side::Over)
                .map_or(Decimal::ZERO, |o| o.point);
            index.insert(player.clone(), props.len());
            props.push(PlayerProp {
                player,
                team: odds.home_team.clone(),
                stat_type: stat.key.to_string(),
                line,
                bookmakers: vec![book],
            });
        }
    }

    props
}

fn is_selected(key: &str, selected: Option<&[String]>) -> bool {
    selected.map_or(true, |keys| keys.iter().any(|k| k == key))
}

fn best_by<'a, F>(
    prop: &'a PlayerProp,
    market_key: &str,
    selected: Option<&[String]>,
    pick: F,
) -> Option<BestPrice>
where
    F: Fn(&'a Market) -> Option<&'a Outcome>,
{
    let mut best: Option<BestPrice> = None;

    for book in &prop.bookmakers {
        if !is_selected(&book.key, selected) {
            continue;
        }
        let Some(outcome) = book.market(market_key).and_then(&pick) else {
            continue;
        };
        // Strict comparison: the first maximum in bookmaker order wins.
        if best.as_ref().map_or(true, |b| outcome.price > b.price) {
            best = Some(BestPrice {
                bookmaker: book.key.clone(),
                line: outcome.point,
                price: outcome.price,
            });
        }
    }

    best
}

/// Best price for a side: each bookmaker's first outcome on that side,
/// highest price wins.
///
/// `selected` restricts the scan to the given bookmaker ids; `None` scans all.
#[must_use]
pub fn best_price(
    prop: &PlayerProp,
    market_key: &str,
    side: Side,
    selected: Option<&[String]>,
) -> Option<BestPrice> {
    best_by(prop, market_key, selected, |market| market.first(side))
}

/// Best price for a side at an exact line.
#[must_use]
pub fn best_price_at_line(
    prop: &PlayerProp,
    market_key: &str,
    side: Side,
    line: Decimal,
    selected: Option<&[String]>,
) -> Option<BestPrice> {
    best_by(prop, market_key, selected, |market| market.at_line(side, line))
}

/// Look up a player's prop by name.
#[must_use]
pub fn find_player<'a>(props: &'a [PlayerProp], player: &str) -> Option<&'a PlayerProp> {
    props.iter().find(|prop| prop.player == player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::odds::AmericanOdds;
    use crate::domain::sport::Sport;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn points() -> &'static StatType {
        Sport::Nba.stat_type("player_points").unwrap()
    }

    fn outcome(side: Side, point: Decimal, price: i32, player: Option<&str>) -> Outcome {
        Outcome::new(side, point, price, player.map(str::to_string))
    }

    fn book(key: &str, markets: Vec<Market>) -> Bookmaker {
        Bookmaker {
            key: key.into(),
            title: key.to_uppercase(),
            last_update: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            markets,
        }
    }

    fn game(bookmakers: Vec<Bookmaker>) -> GameOdds {
        GameOdds {
            id: Some("evt".into()),
            sport_key: Some("basketball_nba".into()),
            commence_time: None,
            home_team: "Home".into(),
            away_team: "Away".into(),
            bookmakers,
        }
    }

    #[test]
    fn alternate_only_is_promoted_to_standard_key() {
        let bookmaker = book(
            "a",
            vec![Market::new(
                "player_points_alternate",
                vec![outcome(Side::Over, dec!(30), 200, Some("X"))],
            )],
        );
        let merged = merge_markets(&bookmaker, points()).unwrap();
        assert_eq!(merged.key, "player_points");
        assert_eq!(merged.outcomes.len(), 1);
    }

    #[test]
    fn alternate_lines_merge_into_standard_market() {
        let bookmaker = book(
            "a",
            vec![
                Market::new(
                    "player_points",
                    vec![outcome(Side::Over, dec!(20.5), -110, Some("X"))],
                ),
                Market::new(
                    "player_points_alternate",
                    vec![
                        outcome(Side::Over, dec!(25.5), 180, Some("X")),
                        outcome(Side::Over, dec!(20.5), -125, Some("X")),
                        outcome(Side::Over, dec!(15.5), -300, Some("X")),
                    ],
                ),
            ],
        );
        let merged = merge_markets(&bookmaker, points()).unwrap();
        let lines: Vec<Decimal> = merged.outcomes.iter().map(|o| o.point).collect();
        assert_eq!(lines, vec![dec!(15.5), dec!(20.5), dec!(25.5)]);
        let standard = merged.at_line(Side::Over, dec!(20.5)).unwrap();
        assert_eq!(standard.price.value(), -110);
    }

    #[test]
    fn alternates_ignored_when_stat_type_has_none() {
        let runs = Sport::Mlb.stat_type("batter_runs_scored").unwrap();
        let bookmaker = book(
            "a",
            vec![Market::new(
                "batter_runs_scored_alternate",
                vec![outcome(Side::Over, dec!(0.5), 120, Some("X"))],
            )],
        );
        assert!(merge_markets(&bookmaker, runs).is_none());
    }

    #[test]
    fn standard_only_is_sorted() {
        let bookmaker = book(
            "a",
            vec![Market::new(
                "player_points",
                vec![
                    outcome(Side::Over, dec!(12.5), 100, Some("X")),
                    outcome(Side::Over, dec!(8.5), -200, Some("Y")),
                ],
            )],
        );
        let merged = merge_markets(&bookmaker, points()).unwrap();
        assert_eq!(merged.outcomes[0].point, dec!(8.5));
    }

    #[test]
    fn outcomes_without_player_are_dropped() {
        let odds = game(vec![book(
            "a",
            vec![Market::new(
                "player_points",
                vec![
                    outcome(Side::Over, dec!(10), 100, None),
                    outcome(Side::Over, dec!(11), 100, Some("X")),
                ],
            )],
        )]);
        let props = normalize(&odds, points());
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].bookmakers[0].markets[0].outcomes.len(), 1);
    }

    #[test]
    fn player_seen_at_two_books_has_one_prop() {
        let market = |price| {
            Market::new(
                "player_points",
                vec![outcome(Side::Over, dec!(20.5), price, Some("X"))],
            )
        };
        let odds = game(vec![book("a", vec![market(100)]), book("b", vec![market(110)])]);

        let props = normalize(&odds, points());
        assert_eq!(props.len(), 1);
        let keys: Vec<&str> = props[0].bookmakers.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(props[0].team, "Home");
        assert_eq!(props[0].stat_type, "player_points");
    }

    #[test]
    fn line_is_first_over_or_zero() {
        let odds = game(vec![book(
            "a",
            vec![Market::new(
                "player_points",
                vec![
                    outcome(Side::Under, dec!(5.5), -110, Some("X")),
                    outcome(Side::Over, dec!(6.5), 120, Some("X")),
                    outcome(Side::Under, dec!(3.5), -110, Some("Y")),
                ],
            )],
        )]);
        let props = normalize(&odds, points());
        let x = find_player(&props, "X").unwrap();
        let y = find_player(&props, "Y").unwrap();
        assert_eq!(x.line, dec!(6.5));
        assert_eq!(y.line, Decimal::ZERO);
    }

    #[test]
    fn best_price_uses_strict_comparison() {
        let market = |price| {
            Market::new(
                "player_points",
                vec![outcome(Side::Over, dec!(20.5), price, Some("X"))],
            )
        };
        let odds = game(vec![
            book("a", vec![market(110)]),
            book("b", vec![market(110)]),
            book("c", vec![market(-120)]),
        ]);
        let props = normalize(&odds, points());

        let best = best_price(&props[0], "player_points", Side::Over, None).unwrap();
        assert_eq!(best.bookmaker, "a");
        assert_eq!(best.price, AmericanOdds::new(110));
    }

    #[test]
    fn best_price_respects_selection() {
        let market = |price| {
            Market::new(
                "player_points",
                vec![outcome(Side::Over, dec!(20.5), price, Some("X"))],
            )
        };
        let odds = game(vec![book("a", vec![market(150)]), book("b", vec![market(-110)])]);
        let props = normalize(&odds, points());

        let selected = vec!["b".to_string()];
        let best = best_price(&props[0], "player_points", Side::Over, Some(selected.as_slice())).unwrap();
        assert_eq!(best.bookmaker, "b");

        let none: Vec<String> = Vec::new();
        assert!(best_price(&props[0], "player_points", Side::Over, Some(none.as_slice())).is_none());
    }

    #[test]
    fn best_price_at_line_only_compares_that_line() {
        let odds = game(vec![
            book(
                "a",
                vec![Market::new(
                    "player_points",
                    vec![
                        outcome(Side::Over, dec!(20.5), -110, Some("X")),
                        outcome(Side::Over, dec!(25.5), 250, Some("X")),
                    ],
                )],
            ),
            book(
                "b",
                vec![Market::new(
                    "player_points",
                    vec![outcome(Side::Over, dec!(20.5), -105, Some("X"))],
                )],
            ),
        ]);
        let props = normalize(&odds, points());

        let best =
            best_price_at_line(&props[0], "player_points", Side::Over, dec!(20.5), None).unwrap();
        assert_eq!(best.bookmaker, "b");
        assert_eq!(best.price.value(), -105);
        assert!(
            best_price_at_line(&props[0], "player_points", Side::Under, dec!(20.5), None)
                .is_none()
        );
        assert_eq!(props[0].lines(), vec![dec!(20.5), dec!(25.5)]);
    }
}
