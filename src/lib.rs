pub mod carriers;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
pub mod logging;
pub mod registry;
pub mod server;
