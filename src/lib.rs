pub mod aggregator;
pub mod config;
pub mod error;
pub mod fallback;
pub mod fixtures;
pub mod model;
pub mod poller;
pub mod remote;
pub mod render;
pub mod service;

pub use error::{Error, Result};
