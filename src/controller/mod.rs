mod client;
mod error;
mod state;

pub use client::GenerationClient;
pub use error::{ControllerError, GenerationError};
pub use state::{Completion, Controller, ControllerState, Phase, Ticket, FAILURE_MESSAGE};
