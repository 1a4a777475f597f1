#![allow(dead_code)]

use std::sync::Arc;

use propline::application::{PreferenceStore, PropBoard};
use propline::domain::odds::GameOdds;
use propline::domain::sport::{Sport, StatType};
use propline::port::OddsProvider;
use propline::testkit::{fixture, ScriptedProvider};
use rust_decimal_macros::dec;

pub fn points() -> &'static StatType {
    Sport::Nba.stat_type("player_points").expect("points stat type")
}

/// Two books, two players, one alternate line at DraftKings.
pub fn two_book_game() -> GameOdds {
    fixture::game(
        "Boston Celtics",
        "New York Knicks",
        vec![
            fixture::bookmaker(
                "draftkings",
                vec![
                    fixture::market(
                        "player_points",
                        vec![
                            fixture::over(dec!(25.5), 120, "Jayson Tatum"),
                            fixture::under(dec!(25.5), -150, "Jayson Tatum"),
                            fixture::over(dec!(22.5), -110, "Jalen Brunson"),
                            fixture::under(dec!(22.5), -110, "Jalen Brunson"),
                        ],
                    ),
                    fixture::market(
                        "player_points_alternate",
                        vec![
                            fixture::over(dec!(20.5), -400, "Jayson Tatum"),
                            fixture::over(dec!(30.5), 250, "Jayson Tatum"),
                        ],
                    ),
                ],
            ),
            fixture::bookmaker(
                "fanduel",
                vec![fixture::market(
                    "player_points",
                    vec![
                        fixture::over(dec!(25.5), -110, "Jayson Tatum"),
                        fixture::under(dec!(25.5), -115, "Jayson Tatum"),
                        fixture::over(dec!(22.5), 105, "Jalen Brunson"),
                    ],
                )],
            ),
        ],
    )
}

pub fn selection(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| (*key).to_string()).collect()
}

pub fn board(provider: &Arc<ScriptedProvider>) -> PropBoard {
    let mut board = PropBoard::new(
        Arc::clone(provider) as Arc<dyn OddsProvider>,
        Arc::new(PreferenceStore::default()),
        Sport::Nba,
    );
    board.set_event("evt-1");
    board
}
