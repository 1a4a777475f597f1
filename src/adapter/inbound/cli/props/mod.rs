//! `props` and `watch` commands.
//!
//! Both open the same session: load the schedule, pick the event, build a
//! [`PropBoard`] for the chosen stat type. `props` fetches once and renders;
//! `watch` keeps issuing fetches through the board on an interval.

pub mod card;
pub mod table;
pub mod watch;

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use super::command::PropsArgs;
use super::{events, output};
use crate::application::board::{FetchOutcome, PropBoard};
use crate::application::normalize::best_price;
use crate::application::selector::EventSelector;
use crate::domain::{
    odds::{AmericanOdds, Side},
    prop::{BestPrice, PlayerProp},
};
use crate::error::{FetchError, Result};
use crate::infrastructure::bootstrap::AppContext;
use crate::infrastructure::config::display::{terminal_width, DisplayConfig, LayoutMode};

/// Line as shown to users: no trailing zeros.
#[must_use]
pub fn format_line(line: Decimal) -> String {
    line.normalize().to_string()
}

/// A book's price for one player, side and exact line.
pub(crate) fn price_at(
    prop: &PlayerProp,
    book: &str,
    market_key: &str,
    side: Side,
    line: Decimal,
) -> Option<AmericanOdds> {
    prop.book(book)?
        .market(market_key)?
        .at_line(side, line)
        .map(|outcome| outcome.price)
}

/// Marks the best cell of a row.
pub(crate) struct BestMarker<'a> {
    bookmaker: Option<&'a str>,
}

impl<'a> BestMarker<'a> {
    pub(crate) fn new(best: Option<&'a BestPrice>) -> Self {
        Self {
            bookmaker: best.map(|b| b.bookmaker.as_str()),
        }
    }

    pub(crate) fn cell(&self, book: &str, price: Option<AmericanOdds>) -> String {
        match price {
            None => "-".to_string(),
            Some(price) if self.bookmaker == Some(book) => output::best(format!("{price}*")),
            Some(price) => price.to_string(),
        }
    }
}

/// An open prop comparison.
pub struct PropSession {
    pub selector: EventSelector,
    pub board: PropBoard,
}

/// Resolve the event and build the board. Returns `None` when the sport has
/// no games, or only games that have started and no `--event` was given.
pub async fn open(ctx: &AppContext, args: &PropsArgs) -> Result<Option<PropSession>> {
    if !args.books.is_empty() {
        ctx.preferences.set_sportsbooks(args.books.clone())?;
    }

    let mut selector = events::load_schedule(ctx.provider.as_ref(), args.sport).await?;
    let event_id = match &args.event {
        Some(id) => selector.select(id)?.id.clone(),
        None => match selector.selected_id() {
            Some(id) => id.to_string(),
            None if selector.events().is_empty() => return Ok(None),
            None => {
                output::note(&format!("No upcoming games for {}", args.sport.label()));
                output::hint("pass --event <id> to pick a game that has started");
                return Ok(None);
            }
        },
    };

    let mut board = PropBoard::new(
        Arc::clone(&ctx.provider),
        Arc::clone(&ctx.preferences),
        args.sport,
    );
    if let Some(stat) = &args.stat {
        board.set_stat_type(stat)?;
    }
    board.set_event(event_id);

    Ok(Some(PropSession { selector, board }))
}

#[derive(Serialize)]
struct PropRecord<'a> {
    #[serde(flatten)]
    prop: &'a PlayerProp,
    best_over: Option<BestPrice>,
    best_under: Option<BestPrice>,
}

/// Render the board's current view in the selected layout.
pub fn render(session: &PropSession, args: &PropsArgs, display: &DisplayConfig) {
    let board = &session.board;
    let stat = board.stat_type();
    let sort = args.sort.unwrap_or(display.sort);
    let view = board.view(&args.search, sort);
    let books = board.books();

    if output::is_json() {
        let records: Vec<PropRecord<'_>> = view
            .iter()
            .map(|prop| PropRecord {
                prop: *prop,
                best_over: best_price(prop, stat.key, Side::Over, Some(books)),
                best_under: best_price(prop, stat.key, Side::Under, Some(books)),
            })
            .collect();
        output::json_output(json!({
            "command": "props",
            "event": session.selector.selected(),
            "stat_type": stat.key,
            "sort": sort.as_str(),
            "books": books,
            "meta": board.meta(),
            "props": records,
        }));
        return;
    }

    let title = match session.selector.selected() {
        Some(event) => format!(
            "{} · {} · {}",
            event.matchup(),
            event.commence_time.format("%a %b %-d %H:%M UTC"),
            stat.label
        ),
        None => stat.label.to_string(),
    };
    output::section(&title);

    if view.is_empty() {
        if args.search.trim().is_empty() {
            output::note("No props posted for this stat type yet");
        } else {
            output::note(&format!("No players match '{}'", args.search.trim()));
        }
        return;
    }

    let layout = args
        .layout
        .unwrap_or(display.layout)
        .resolve(terminal_width(), display.breakpoint);
    match layout {
        LayoutMode::Cards => {
            let page = card::Page::new(view.len(), args.page, display.page_size);
            for prop in &view[page.start..page.end] {
                output::lines(&card::render(prop, stat.key, books));
            }
            output::note(&format!(
                "page {}/{} · {} players",
                page.number,
                page.total,
                view.len()
            ));
        }
        _ => {
            output::lines(&table::render(&view, stat.key, books));
            output::lines(&table::caption(view.len()));
        }
    }

    footer(board);
}

fn footer(board: &PropBoard) {
    let Some(meta) = board.meta() else {
        return;
    };
    let source = if meta.cache_hit { "cached" } else { "live" };
    let mut parts = vec![source.to_string()];
    if let Some(updated) = meta.last_updated {
        parts.push(format!("updated {}", updated.format("%H:%M:%S UTC")));
    }
    if let Some(remaining) = meta.requests_remaining {
        parts.push(format!("{remaining} requests left"));
    }
    if output::verbosity() > 0 {
        if let Some(used) = meta.requests_used {
            parts.push(format!("{used} used"));
        }
    }
    output::note(&parts.join(" · "));
}

/// Run one fetch through the board behind a spinner.
pub async fn fetch(board: &mut PropBoard) -> Result<Option<FetchOutcome>> {
    let pb = output::spinner(&format!("Fetching {}", board.stat_type().label));
    let outcome = board.refresh().await;
    match outcome {
        Some(FetchOutcome::Failed) => {
            output::spinner_fail(&pb, "Could not load props");
            Err(board.error().cloned().unwrap_or(FetchError::Empty).into())
        }
        Some(FetchOutcome::Applied) => {
            output::spinner_success(&pb, &format!("{} players", board.props().len()));
            Ok(outcome)
        }
        _ => {
            pb.finish_and_clear();
            Ok(outcome)
        }
    }
}

/// Execute `props`.
pub async fn execute(ctx: &AppContext, args: &PropsArgs) -> Result<()> {
    let Some(mut session) = open(ctx, args).await? else {
        return Ok(());
    };
    fetch(&mut session.board).await?;
    render(&session, args, &ctx.config.display);
    Ok(())
}
