pub mod catalog;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod http;
pub mod logging;
pub mod schedule;
