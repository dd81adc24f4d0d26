pub mod blocks;
pub mod clients;
pub mod config;
pub mod newsletter;
