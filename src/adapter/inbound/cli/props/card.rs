//! Narrow layout: one card per player, paginated.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::{format_line, price_at, BestMarker};
use crate::adapter::inbound::cli::output;
use crate::application::normalize::best_price_at_line;
use crate::domain::{odds::Side, prop::PlayerProp, sportsbook};

/// One page of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number, clamped to the available pages.
    pub number: usize,
    pub total: usize,
    /// Index range of the page within the full list.
    pub start: usize,
    pub end: usize,
}

impl Page {
    /// Compute the page window. An empty list has a single empty page.
    #[must_use]
    pub fn new(len: usize, requested: usize, size: usize) -> Self {
        let size = size.max(1);
        let total = len.div_ceil(size).max(1);
        let number = requested.clamp(1, total);
        let start = ((number - 1) * size).min(len);
        let end = (start + size).min(len);
        Self {
            number,
            total,
            start,
            end,
        }
    }
}

/// Render one player's card: name, team and a row per line and side with
/// every shown book's price.
#[must_use]
pub fn render(prop: &PlayerProp, market_key: &str, books: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Line".to_string(), "Side".to_string(), "Prices".to_string()]);

    for line in prop.lines() {
        for side in Side::BOTH {
            let best = best_price_at_line(prop, market_key, side, line, Some(books));
            let marker = BestMarker::new(best.as_ref());
            let prices: Vec<String> = books
                .iter()
                .filter_map(|book| {
                    let price = price_at(prop, book, market_key, side, line)?;
                    Some(format!(
                        "{} {}",
                        sportsbook::title(book),
                        marker.cell(book, Some(price))
                    ))
                })
                .collect();
            if prices.is_empty() {
                continue;
            }
            builder.push_record([format_line(line), side.to_string(), prices.join("\n")]);
        }
    }

    let mut table = builder.build();
    table.with(Style::modern());
    format!(
        "{} {}\n{}",
        output::highlight(&prop.player),
        output::muted(&prop.team),
        table
    )
}
