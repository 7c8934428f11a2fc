use leptos::prelude::*;
use leptos_use::use_interval_fn;
use rand::{rngs::SmallRng, SeedableRng};
use state::leaderboard::{seed_players, LeaderboardView, LiveFeed, RowTarget};

use super::challenge_popup::ChallengePopup;
use super::podium::Podium;
use super::table::LeaderboardTable;
use super::SignalPort;

/// Mock leaderboard that re-ranks itself every tick of the simulated feed.
#[component]
pub fn LiveLeaderboard() -> impl IntoView {
    let port = SignalPort::new();
    let feed = LiveFeed::start(LeaderboardView::new(
        seed_players(),
        port,
        SmallRng::from_os_rng(),
    ));
    let period = feed.period_ms();
    let feed = StoredValue::new(feed);
    log::debug!("live leaderboard ticking every {period}ms");

    let _ticker = use_interval_fn(
        move || {
            feed.update_value(|feed| {
                feed.tick();
            })
        },
        period,
    );

    let on_click = Callback::new(move |target: RowTarget| {
        feed.update_value(|feed| {
            let outcome = feed.click(target);
            log::debug!("leaderboard click: {outcome:?}");
        })
    });

    view! {
        <section class="leaderboard-section">
            <Podium port=port />
            <LeaderboardTable port=port on_click=on_click />
            <ChallengePopup port=port />
        </section>
    }
}
