pub mod fade_in;
pub mod leaderboard;
pub mod nav_menu;
pub mod particle_canvas;
pub mod popup;
