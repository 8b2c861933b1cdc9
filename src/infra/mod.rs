pub mod config;
pub mod mint;
