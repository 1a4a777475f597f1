//! `watch` command: periodic refresh through the board session.
//!
//! Each tick issues a ticketed fetch on a spawned task; results come back
//! over a channel and go through [`PropBoard::complete_fetch`], which drops
//! anything superseded by a newer ticket.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::{open, render, PropSession};
use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::output;
use crate::application::board::{FetchOutcome, FetchTicket, PropBoard};
use crate::error::{FetchError, Result};
use crate::infrastructure::bootstrap::AppContext;
use crate::port::outbound::odds::OddsResponse;

type Completion = (FetchTicket, std::result::Result<OddsResponse, FetchError>);

/// Issue a fetch on a background task. No-op when no event is selected.
fn spawn_fetch(board: &mut PropBoard, tx: &mpsc::UnboundedSender<Completion>) {
    let Some((ticket, request)) = board.begin_fetch() else {
        return;
    };
    let provider = board.provider();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = provider.props(&request).await;
        // The receiver is gone only after shutdown.
        let _ = tx.send((ticket, result));
    });
}

/// Handle a completed fetch. Returns whether the view should be redrawn.
fn apply(session: &mut PropSession, completion: Completion, every: u64) -> bool {
    let (ticket, result) = completion;
    match session.board.complete_fetch(ticket, result) {
        FetchOutcome::Stale => false,
        FetchOutcome::Failed => {
            if let Some(err) = session.board.error() {
                output::warning(&format!("Refresh failed: {err}; retrying in {every}s"));
            }
            false
        }
        FetchOutcome::Applied | FetchOutcome::Empty => true,
    }
}

/// Execute `watch`.
pub async fn execute(ctx: &AppContext, args: &WatchArgs) -> Result<()> {
    let Some(mut session) = open(ctx, &args.props).await? else {
        return Ok(());
    };
    info!(interval_secs = args.interval, "Watching props");
    output::hint("press Ctrl-C to stop");

    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut ticker = interval(Duration::from_secs(args.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                debug!(loading = session.board.is_loading(), "Refresh tick");
                spawn_fetch(&mut session.board, &tx);
            }
            Some(completion) = rx.recv() => {
                if apply(&mut session, completion, args.interval) {
                    render(&session, &args.props, &ctx.config.display);
                    output::note(&format!(
                        "refreshed {} · every {}s",
                        Utc::now().format("%H:%M:%S"),
                        args.interval
                    ));
                }
            }
            _ = &mut shutdown => {
                info!("Watch stopped");
                break;
            }
        }
    }

    Ok(())
}
