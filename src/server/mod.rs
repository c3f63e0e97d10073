//! Things that only run on the server (reading the config, handling signals)
pub mod config;
pub mod signal_handler;
