pub mod config;
pub mod last_updated;
pub mod overview;
