pub mod auth;
pub mod cron;
pub mod leaderboard;
pub mod matches;
pub mod predictions;
