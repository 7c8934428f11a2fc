use consts::leaderboard::SUMMARY_SLOTS;
use leptos::prelude::*;
use state::leaderboard::{LeaderboardPort, SummarySlot, TableRow};

/// Leaderboard port backed by signals; the podium, table and popup
/// components read from it.
#[derive(Clone, Copy)]
pub struct SignalPort {
    pub slots: [RwSignal<Option<SummarySlot>>; SUMMARY_SLOTS],
    pub rows: RwSignal<Vec<TableRow>>,
    pub expanded: RwSignal<Option<String>>,
    pub challenged: RwSignal<Option<String>>,
}

impl Default for SignalPort {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPort {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| RwSignal::new(None)),
            rows: RwSignal::new(Vec::new()),
            expanded: RwSignal::new(None),
            challenged: RwSignal::new(None),
        }
    }

    pub fn is_expanded(&self, player: &str) -> bool {
        self.expanded.with(|e| e.as_deref() == Some(player))
    }
}

impl LeaderboardPort for SignalPort {
    fn render_summary_slot(&mut self, index: usize, slot: SummarySlot) {
        if let Some(target) = self.slots.get(index) {
            target.set(Some(slot));
        }
    }

    fn render_table(&mut self, rows: Vec<TableRow>) {
        let expanded = rows
            .iter()
            .find(|row| row.expanded)
            .map(|row| row.player.clone());
        self.expanded.set(expanded);
        self.rows.set(rows);
    }

    fn set_expanded(&mut self, player: Option<&str>) {
        self.expanded.set(player.map(str::to_string));
    }

    fn notify_challenge(&mut self, player: &str) {
        self.challenged.set(Some(player.to_string()));
    }
}
