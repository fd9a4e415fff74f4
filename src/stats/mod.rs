pub mod aggregate;
pub mod leaderboard;
