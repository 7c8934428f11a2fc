pub mod feed;
pub mod format;
pub mod port;
pub mod view;

use consts::AVATAR_BASE;

pub use feed::LiveFeed;
pub use port::{BoardRow, LeaderboardPort, MemoryPort, SummarySlot, TableRow};
pub use view::{ClickOutcome, LeaderboardView, RowTarget};

/// One competitor's stats. `player` is the identity key.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    pub player: String,
    pub won: f64,
    pub trades: u32,
    pub win_rate: f64,
    pub volume: f64,
    pub avatar_url: String,
    pub wallet: String,
    pub joined: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPlayer {
    pub rank: u32,
    pub record: PlayerRecord,
}

/// Orders players by `won`, highest first, and numbers them from 1.
///
/// The sort is stable, so players with equal winnings keep their input order.
pub fn rank(mut players: Vec<PlayerRecord>) -> Vec<RankedPlayer> {
    players.sort_by(|a, b| b.won.total_cmp(&a.won));
    players
        .into_iter()
        .zip(1..)
        .map(|(record, rank)| RankedPlayer { rank, record })
        .collect()
}

fn seed(player: &str, won: f64, volume: f64, wallet: &str, joined: &str) -> PlayerRecord {
    let first_name = player.split('_').next().unwrap_or(player);
    PlayerRecord {
        player: player.to_string(),
        won,
        trades: 5,
        win_rate: 34.07,
        volume,
        avatar_url: format!("{AVATAR_BASE}?seed={first_name}"),
        wallet: wallet.to_string(),
        joined: joined.to_string(),
    }
}

/// The mock roster the leaderboard starts from.
pub fn seed_players() -> Vec<PlayerRecord> {
    vec![
        seed("marion_stiedemann", 3000.50, 1671.57, "0x...a1b2", "2025-10-20"),
        seed("shannon_kautzer", 1950.20, 1671.57, "0x...c3d4", "2025-10-21"),
        seed("billy_mraz", 1800.00, 1671.57, "0x...e5f6", "2025-10-22"),
        seed("bernadette_mclaugh", 5700.00, 1500.56, "0x...g7h8", "2025-10-23"),
        seed("alberta_spencer", 1650.00, 1400.56, "0x...i9j0", "2025-10-24"),
        seed("leo_ruecker", 1500.00, 1300.56, "0x...k1l2", "2025-10-25"),
        seed("rudolph_boehm", 1400.00, 1200.56, "0x...m3n4", "2025-10-26"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, won: f64) -> PlayerRecord {
        PlayerRecord {
            player: name.to_string(),
            won,
            trades: 0,
            win_rate: 0.0,
            volume: 0.0,
            avatar_url: String::new(),
            wallet: String::new(),
            joined: String::new(),
        }
    }

    #[test]
    fn empty_roster_ranks_to_nothing() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn ranks_are_dense_and_ordered_by_winnings() {
        let ranked = rank(seed_players());

        let ranks: Vec<u32> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
        assert!(ranked.windows(2).all(|w| w[0].record.won >= w[1].record.won));
    }

    #[test]
    fn equal_winnings_keep_input_order() {
        let ranked = rank(vec![
            player("a", 10.0),
            player("b", 20.0),
            player("c", 10.0),
            player("d", 20.0),
        ]);

        let order: Vec<&str> = ranked.iter().map(|p| p.record.player.as_str()).collect();
        assert_eq!(order, ["b", "d", "a", "c"]);
    }

    #[test]
    fn seed_roster_podium() {
        let ranked = rank(seed_players());

        assert_eq!(ranked[0].record.player, "bernadette_mclaugh");
        assert_eq!(ranked[0].record.won, 5700.00);
        assert_eq!(ranked[1].record.won, 3000.50);
        assert_eq!(ranked[2].record.won, 1950.20);
    }

    #[test]
    fn seed_avatars_use_first_name() {
        let players = seed_players();
        assert_eq!(
            players[0].avatar_url,
            "https://api.dicebear.com/8.x/pixel-art/svg?seed=marion"
        );
    }
}
