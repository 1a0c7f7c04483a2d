mod request_config;

pub use request_config::*;
