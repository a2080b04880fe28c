//! OSC output over UDP

pub mod client;
pub mod message;

pub use client::OscClient;
pub use message::{OscArgument, OscMessage};
