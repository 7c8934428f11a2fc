use consts::leaderboard::SUMMARY_SLOTS;

/// What a podium slot shows.
#[derive(Clone, Debug, PartialEq)]
pub struct SummarySlot {
    pub player: String,
    pub volume: String,
    pub avatar_url: String,
}

/// A table row ready for display, paired with a collapsed detail row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub player: String,
    pub rank: String,
    pub won: String,
    pub trades: u32,
    pub win_rate: String,
    pub volume: String,
    pub wallet: String,
    pub joined: String,
    pub flash: bool,
    pub expanded: bool,
}

/// Rendering surface the leaderboard view writes to.
pub trait LeaderboardPort {
    /// Overwrites podium slot `index`. Slots that are never written keep their content.
    fn render_summary_slot(&mut self, index: usize, slot: SummarySlot);

    /// Replaces every generated row. The reserved row stays where it is.
    fn render_table(&mut self, rows: Vec<TableRow>);

    fn set_expanded(&mut self, player: Option<&str>);

    fn notify_challenge(&mut self, player: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoardRow {
    Reserved,
    Summary(TableRow),
    Detail { player: String },
}

/// In-memory rendering surface, mirrors the table body node by node.
///
/// The reserved row starts at the top; `render_table` rebuilds around it and leaves it
/// at whatever index it occupies.
#[derive(Clone, Debug)]
pub struct MemoryPort {
    pub slots: [Option<SummarySlot>; SUMMARY_SLOTS],
    pub rows: Vec<BoardRow>,
    pub challenges: Vec<String>,
    pub table_renders: usize,
}

impl Default for MemoryPort {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPort {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            rows: vec![BoardRow::Reserved],
            challenges: Vec::new(),
            table_renders: 0,
        }
    }

    pub fn reserved_positions(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, BoardRow::Reserved))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn summary_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter_map(|row| match row {
            BoardRow::Summary(row) => Some(row),
            _ => None,
        })
    }

    pub fn expanded_players(&self) -> Vec<&str> {
        self.summary_rows()
            .filter(|row| row.expanded)
            .map(|row| row.player.as_str())
            .collect()
    }

    pub fn flashed_players(&self) -> Vec<&str> {
        self.summary_rows()
            .filter(|row| row.flash)
            .map(|row| row.player.as_str())
            .collect()
    }
}

impl LeaderboardPort for MemoryPort {
    fn render_summary_slot(&mut self, index: usize, slot: SummarySlot) {
        if let Some(target) = self.slots.get_mut(index) {
            *target = Some(slot);
        }
    }

    fn render_table(&mut self, rows: Vec<TableRow>) {
        let reserved_at = self
            .rows
            .iter()
            .position(|row| matches!(row, BoardRow::Reserved));

        let mut rebuilt = Vec::with_capacity(rows.len() * 2 + 1);
        for row in rows {
            let player = row.player.clone();
            rebuilt.push(BoardRow::Summary(row));
            rebuilt.push(BoardRow::Detail { player });
        }
        if let Some(idx) = reserved_at {
            rebuilt.insert(idx.min(rebuilt.len()), BoardRow::Reserved);
        }

        self.rows = rebuilt;
        self.table_renders += 1;
    }

    fn set_expanded(&mut self, player: Option<&str>) {
        for row in self.rows.iter_mut() {
            if let BoardRow::Summary(row) = row {
                row.expanded = Some(row.player.as_str()) == player;
            }
        }
    }

    fn notify_challenge(&mut self, player: &str) {
        self.challenges.push(player.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player: &str) -> TableRow {
        TableRow {
            player: player.to_string(),
            rank: String::new(),
            won: String::new(),
            trades: 0,
            win_rate: String::new(),
            volume: String::new(),
            wallet: String::new(),
            joined: String::new(),
            flash: false,
            expanded: false,
        }
    }

    #[test]
    fn reserved_row_keeps_its_index_after_rebuild() {
        let mut port = MemoryPort::new();
        port.rows = vec![
            BoardRow::Summary(row("a")),
            BoardRow::Detail { player: "a".into() },
            BoardRow::Reserved,
        ];

        port.render_table(vec![row("x"), row("y"), row("z")]);

        assert_eq!(port.reserved_positions(), [2]);
        assert_eq!(port.rows.len(), 7);
        let players: Vec<&str> = port.summary_rows().map(|r| r.player.as_str()).collect();
        assert_eq!(players, ["x", "y", "z"]);
        assert_eq!(port.rows[1], BoardRow::Detail { player: "x".into() });
        assert_eq!(port.rows[3], BoardRow::Summary(row("y")));
    }

    #[test]
    fn reserved_row_stays_last_when_table_shrinks() {
        let mut port = MemoryPort::new();
        port.render_table(vec![row("a"), row("b")]);
        let last = port.rows.len();
        port.rows.push(BoardRow::Reserved);
        port.rows.remove(0);
        assert_eq!(port.reserved_positions(), [last - 1]);

        port.render_table(vec![row("c")]);

        assert_eq!(port.reserved_positions(), [2]);
        assert_eq!(port.rows.last(), Some(&BoardRow::Reserved));
    }
}
