use consts::leaderboard::TICK_INTERVAL;
use rand::Rng;
use web_time::Duration;

use super::port::LeaderboardPort;
use super::view::{ClickOutcome, LeaderboardView, RowTarget};

/// The simulated live feed: a leaderboard view plus the period it ticks at.
///
/// Nothing in here waits on a clock. Whoever owns the feed calls [`LiveFeed::tick`]
/// once per period (a browser interval on the site, the test body in tests).
/// Late ticks are never replayed.
pub struct LiveFeed<P, R> {
    view: LeaderboardView<P, R>,
    period: Duration,
    ticks: u64,
}

impl<P: LeaderboardPort, R: Rng> LiveFeed<P, R> {
    /// Wraps `view` and draws its first frame.
    pub fn start(mut view: LeaderboardView<P, R>) -> Self {
        view.refresh();
        Self {
            view,
            period: TICK_INTERVAL,
            ticks: 0,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn period_ms(&self) -> u64 {
        self.period.as_millis() as u64
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> Option<String> {
        self.ticks += 1;
        self.view.simulate_tick()
    }

    pub fn click(&mut self, target: RowTarget) -> ClickOutcome {
        self.view.on_row_click(target)
    }

    pub fn view(&self) -> &LeaderboardView<P, R> {
        &self.view
    }
}
