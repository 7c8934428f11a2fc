pub mod leaderboard;
pub mod menu;
pub mod particles;
