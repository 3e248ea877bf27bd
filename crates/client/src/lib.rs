//! yclients_client - client library for the yclients booking API.

pub mod client;
pub mod dates;
pub mod error;

pub use client::YclientsClient;
pub use error::{Error, Result};
