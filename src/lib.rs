pub mod config;
pub mod engine;
pub mod error;
pub mod mood;
pub mod server;

pub use error::{Error, InferenceError, Result};
