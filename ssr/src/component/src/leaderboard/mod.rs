pub mod challenge_popup;
pub mod live;
pub mod podium;
pub mod signal_port;
pub mod table;

pub use live::LiveLeaderboard;
pub use signal_port::SignalPort;
