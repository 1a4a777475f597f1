//! Wide layout: one comparison table, a row per player, line and side.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::{format_line, price_at, BestMarker};
use crate::adapter::inbound::cli::output;
use crate::application::normalize::best_price_at_line;
use crate::domain::{odds::Side, prop::PlayerProp, sportsbook};

/// Render the comparison table.
///
/// Columns are `Player | Line | Side | <book>... | Best`. The cell holding
/// the best price of each row is highlighted and repeated in `Best`.
#[must_use]
pub fn render(props: &[&PlayerProp], market_key: &str, books: &[String]) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Player".to_string(), "Line".to_string(), "Side".to_string()];
    header.extend(books.iter().map(|key| sportsbook::title(key).to_string()));
    header.push("Best".to_string());
    builder.push_record(header);

    for prop in props {
        let mut first_row = true;
        for line in prop.lines() {
            for side in Side::BOTH {
                let prices: Vec<_> = books
                    .iter()
                    .map(|book| price_at(prop, book, market_key, side, line))
                    .collect();
                if prices.iter().all(Option::is_none) {
                    continue;
                }
                let best = best_price_at_line(prop, market_key, side, line, Some(books));
                let marker = BestMarker::new(best.as_ref());

                let mut row = vec![
                    if first_row {
                        prop.player.clone()
                    } else {
                        String::new()
                    },
                    format_line(line),
                    side.to_string(),
                ];
                row.extend(
                    books
                        .iter()
                        .zip(&prices)
                        .map(|(book, price)| marker.cell(book, *price)),
                );
                row.push(best.map_or_else(
                    || "-".to_string(),
                    |best| format!("{} {}", best.price, sportsbook::title(&best.bookmaker)),
                ));
                builder.push_record(row);
                first_row = false;
            }
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Title line above the table.
#[must_use]
pub fn caption(count: usize) -> String {
    output::muted(format!("{count} players"))
}
