pub mod billing;
pub mod cli;
pub mod config;
pub mod session;
pub mod store;
