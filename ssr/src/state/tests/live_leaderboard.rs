use rand::{rngs::SmallRng, SeedableRng};
use state::leaderboard::{
    rank, seed_players, BoardRow, ClickOutcome, LeaderboardView, LiveFeed, MemoryPort, RowTarget,
};

fn feed(seed: u64) -> LiveFeed<MemoryPort, SmallRng> {
    LiveFeed::start(LeaderboardView::new(
        seed_players(),
        MemoryPort::new(),
        SmallRng::seed_from_u64(seed),
    ))
}

#[test]
fn seed_roster_fills_the_podium() {
    let feed = feed(0);
    let port = feed.view().port();

    let podium: Vec<(&str, &str)> = port
        .slots
        .iter()
        .flatten()
        .map(|slot| (slot.player.as_str(), slot.volume.as_str()))
        .collect();
    assert_eq!(
        podium,
        [
            ("bernadette_mclaugh", "1,500.56"),
            ("marion_stiedemann", "1,671.57"),
            ("shannon_kautzer", "1,671.57"),
        ]
    );
}

#[test]
fn reserved_row_survives_a_long_session() {
    let mut feed = feed(1234);
    let players = [
        "billy_mraz",
        "leo_ruecker",
        "alberta_spencer",
        "billy_mraz",
    ];

    for round in 0..40 {
        feed.tick();
        feed.click(RowTarget::Summary(players[round % players.len()].to_string()));

        let port = feed.view().port();
        assert_eq!(port.reserved_positions(), [0]);
        assert_eq!(port.rows.first(), Some(&BoardRow::Reserved));
        assert!(port.expanded_players().len() <= 1);
        assert!(feed.view().highlighted().is_empty());
    }
}

#[test]
fn table_order_matches_ranking_after_ticks() {
    let mut feed = feed(77);
    for _ in 0..25 {
        feed.tick();
    }

    let expected: Vec<String> = rank(feed.view().players().to_vec())
        .into_iter()
        .map(|p| p.record.player)
        .collect();
    let rendered: Vec<String> = feed
        .view()
        .port()
        .summary_rows()
        .map(|row| row.player.clone())
        .collect();
    assert_eq!(rendered, expected);

    let ranks: Vec<String> = feed
        .view()
        .port()
        .summary_rows()
        .map(|row| row.rank.clone())
        .collect();
    assert_eq!(ranks, (1..=7).map(|r| format!("[{r}]")).collect::<Vec<_>>());
}

#[test]
fn challenge_reaches_the_port_without_expanding() {
    let mut feed = feed(8);

    let outcome = feed.click(RowTarget::Challenge("rudolph_boehm".into()));

    assert_eq!(outcome, ClickOutcome::Challenged("rudolph_boehm".into()));
    assert_eq!(feed.view().port().challenges, ["rudolph_boehm"]);
    assert!(feed.view().port().expanded_players().is_empty());
    assert_eq!(feed.view().expanded(), None);
}

#[test]
fn os_seeded_feeds_pick_independent_players() {
    let start = || {
        LiveFeed::start(LeaderboardView::new(
            seed_players(),
            MemoryPort::new(),
            SmallRng::from_os_rng(),
        ))
    };
    let (mut a, mut b) = (start(), start());

    let picks_a: Vec<_> = (0..32).map(|_| a.tick()).collect();
    let picks_b: Vec<_> = (0..32).map(|_| b.tick()).collect();

    assert_ne!(picks_a, picks_b);
}
