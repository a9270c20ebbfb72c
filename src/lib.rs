// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod error;
pub mod guess;
pub mod phrases;
pub mod similarity;
pub mod state;
pub mod store;
pub mod types;
pub mod words;
