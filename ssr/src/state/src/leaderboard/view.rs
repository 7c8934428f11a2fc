use std::collections::HashSet;

use consts::leaderboard::{SUMMARY_SLOTS, VOLUME_BUMP_MAX, WON_BUMP_MAX};
use rand::Rng;

use super::format::{format_amount, format_rank, format_win_rate};
use super::port::{LeaderboardPort, SummarySlot, TableRow};
use super::{rank, PlayerRecord, RankedPlayer};

/// Where a click on the table body landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowTarget {
    Summary(String),
    Detail(String),
    Challenge(String),
    Reserved,
    Outside,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Expanded(String),
    Collapsed(String),
    Challenged(String),
    Ignored,
}

/// Owns the authoritative roster and the transient table state
/// (expanded row, rows to flash on the next render).
pub struct LeaderboardView<P, R> {
    players: Vec<PlayerRecord>,
    highlighted: HashSet<String>,
    expanded: Option<String>,
    port: P,
    rng: R,
}

impl<P: LeaderboardPort, R: Rng> LeaderboardView<P, R> {
    pub fn new(players: Vec<PlayerRecord>, port: P, rng: R) -> Self {
        Self {
            players,
            highlighted: HashSet::new(),
            expanded: None,
            port,
            rng,
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn highlighted(&self) -> &HashSet<String> {
        &self.highlighted
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Re-ranks a snapshot of the roster and redraws the podium and the table.
    pub fn refresh(&mut self) {
        let ranked = rank(self.players.clone());
        let top = ranked.len().min(SUMMARY_SLOTS);
        self.render_summary(&ranked[..top]);
        self.render_table(&ranked);
    }

    /// Writes the first `SUMMARY_SLOTS` entries of `top`. When fewer players are
    /// available the remaining slots are not touched and keep whatever they showed.
    pub fn render_summary(&mut self, top: &[RankedPlayer]) {
        for (index, ranked) in top.iter().take(SUMMARY_SLOTS).enumerate() {
            self.port.render_summary_slot(
                index,
                SummarySlot {
                    player: ranked.record.player.clone(),
                    volume: format_amount(ranked.record.volume),
                    avatar_url: ranked.record.avatar_url.clone(),
                },
            );
        }
    }

    /// Rebuilds the generated rows. Flash marks are consumed by this call.
    pub fn render_table(&mut self, ranked: &[RankedPlayer]) {
        let rows = ranked
            .iter()
            .map(|ranked| {
                let record = &ranked.record;
                TableRow {
                    player: record.player.clone(),
                    rank: format_rank(ranked.rank),
                    won: format_amount(record.won),
                    trades: record.trades,
                    win_rate: format_win_rate(record.win_rate),
                    volume: format_amount(record.volume),
                    wallet: record.wallet.clone(),
                    joined: record.joined.clone(),
                    flash: self.highlighted.contains(&record.player),
                    expanded: self.expanded.as_deref() == Some(record.player.as_str()),
                }
            })
            .collect();

        self.port.render_table(rows);
        self.highlighted.clear();
    }

    pub fn on_row_click(&mut self, target: RowTarget) -> ClickOutcome {
        match target {
            RowTarget::Summary(player) => {
                if self.expanded.as_deref() == Some(player.as_str()) {
                    self.expanded = None;
                    self.port.set_expanded(None);
                    ClickOutcome::Collapsed(player)
                } else {
                    self.port.set_expanded(Some(&player));
                    self.expanded = Some(player.clone());
                    ClickOutcome::Expanded(player)
                }
            }
            RowTarget::Challenge(player) => {
                log::info!("Challenging {player}");
                self.port.notify_challenge(&player);
                ClickOutcome::Challenged(player)
            }
            RowTarget::Detail(_) | RowTarget::Reserved | RowTarget::Outside => {
                ClickOutcome::Ignored
            }
        }
    }

    /// Bumps one random player's stats, flags them for a flash and re-renders.
    /// Returns the updated player's key, or `None` on an empty roster.
    pub fn simulate_tick(&mut self) -> Option<String> {
        if self.players.is_empty() {
            return None;
        }

        let idx = self.rng.random_range(0..self.players.len());
        let won_bump = self.rng.random_range(0.0..WON_BUMP_MAX);
        let volume_bump = self.rng.random_range(0.0..VOLUME_BUMP_MAX);

        let record = &mut self.players[idx];
        record.won += won_bump;
        record.volume += volume_bump;
        record.trades += 1;
        let player = record.player.clone();
        log::debug!("live update for {player}: +{won_bump:.2} won, +{volume_bump:.2} volume");

        self.highlighted.insert(player.clone());
        self.refresh();
        Some(player)
    }
}
