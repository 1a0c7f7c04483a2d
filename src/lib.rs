pub mod cli;
pub mod command;
pub mod completer;
pub mod config;
pub mod http;
