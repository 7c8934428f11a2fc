use web_time::Duration;

pub const SITE_NAME: &str = "Trade Arena";

// an example URL is "https://api.dicebear.com/8.x/pixel-art/svg?seed=marion";
pub const AVATAR_BASE: &str = "https://api.dicebear.com/8.x/pixel-art/svg";

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Fraction of a section that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub mod leaderboard {
    use super::Duration;

    /// Period of the simulated live feed.
    pub const TICK_INTERVAL: Duration = Duration::from_secs(2);
    /// Number of podium slots above the table.
    pub const SUMMARY_SLOTS: usize = 3;
    /// Upper (exclusive) bound of the per-tick `won` bump.
    pub const WON_BUMP_MAX: f64 = 100.0;
    /// Upper (exclusive) bound of the per-tick `volume` bump.
    pub const VOLUME_BUMP_MAX: f64 = 50.0;
    pub const RESERVED_ROW_LABEL: &str = "You";
}

pub mod particles {
    pub const MAX_PARTICLES: usize = 50;
    /// Full width of the velocity range, centered on zero.
    pub const SPEED_SPREAD: f64 = 0.5;
    pub const DECAY_MIN: f64 = 0.005;
    pub const DECAY_SPREAD: f64 = 0.01;
    pub const RADIUS: f64 = 2.0;
    pub const COLOR: &str = "#00ff88";
}

pub mod nav {
    pub const LINKS: &[(&str, &str)] = &[
        ("/", "Home"),
        ("/leaderboard", "Leaderboard"),
        ("/#features", "Features"),
        ("/#community", "Community"),
    ];
}
