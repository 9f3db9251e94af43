pub mod cli;
pub mod config;
pub mod install;
pub mod logging;
pub mod message;
pub mod notify;
pub mod record;
pub mod sink;
