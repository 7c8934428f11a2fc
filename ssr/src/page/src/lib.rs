pub mod home;
pub mod leaderboard;
