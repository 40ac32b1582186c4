pub mod leaderboard;
pub mod matches;
pub mod prediction;
pub mod team;
pub mod user;
