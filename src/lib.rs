pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod export;
pub mod exporter;
pub mod logging;
