//! fleetwise_client - CLI client for the fleetwise API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::FleetwiseClient;
pub use error::{ClientError, Result};
