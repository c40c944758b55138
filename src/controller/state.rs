use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::constellation::{Constellation, ConstellationRequest};

use super::error::{ControllerError, GenerationError};

/// Shown for every failed submission, whatever the underlying cause.
pub const FAILURE_MESSAGE: &str =
    "Could not build constellation. Is the generation service running?";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema, strum_macros::Display)]
#[serde(tag = "status", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Idle,
    Submitting { sequence: u64 },
    Succeeded,
    Failed { message: String },
}

/// Everything the page is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ControllerState {
    pub form: ConstellationRequest,
    pub phase: Phase,
    pub constellation: Option<Constellation>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ControllerState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// A submission that has been accepted and must be resolved with
/// [`Controller::complete`] using the same sequence number.
#[derive(Debug)]
pub struct Ticket {
    pub sequence: u64,
    pub request: ConstellationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

pub struct Controller {
    state: ControllerState,
    last_sequence: u64,
}

impl Controller {
    pub fn new(form: ConstellationRequest) -> Self {
        Self {
            state: ControllerState {
                form,
                phase: Phase::Idle,
                constellation: None,
                updated_at: None,
            },
            last_sequence: 0,
        }
    }

    pub fn snapshot(&self) -> ControllerState {
        self.state.clone()
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Capture the form values and move to `Submitting`, dropping any
    /// previous error. The last good constellation stays in place.
    pub fn submit(&mut self, request: ConstellationRequest) -> Result<Ticket, ControllerError> {
        if self.state.is_submitting() {
            log::warn!("Refusing submission while {}", self.state.phase);
            return Err(ControllerError::Busy);
        }

        self.last_sequence += 1;
        let sequence = self.last_sequence;
        self.state.form = request.clone();
        self.state.phase = Phase::Submitting { sequence };

        log::info!(
            "Submitting constellation '{}' ({} planes x {} satellites, #{})",
            request.name,
            request.planes,
            request.sats_per_plane,
            sequence
        );

        Ok(Ticket { sequence, request })
    }

    /// Resolve the submission identified by `sequence`. Completions for any
    /// other sequence are ignored and leave the state untouched.
    pub fn complete(
        &mut self,
        sequence: u64,
        outcome: Result<Constellation, GenerationError>,
    ) -> Completion {
        match self.state.phase {
            Phase::Submitting { sequence: current } if current == sequence => {}
            _ => {
                log::warn!(
                    "Discarding stale completion for submission #{} (controller is {})",
                    sequence,
                    self.state.phase
                );
                return Completion::Stale;
            }
        }

        match outcome {
            Ok(constellation) => {
                log::info!(
                    "Submission #{} built '{}' with {} satellites",
                    sequence,
                    constellation.name,
                    constellation.satellites.len()
                );
                self.state.constellation = Some(constellation);
                self.state.updated_at = Some(Utc::now());
                self.state.phase = Phase::Succeeded;
            }
            Err(e) => {
                log::error!("Submission #{} failed: {}", sequence, e);
                self.state.phase = Phase::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                };
            }
        }

        Completion::Applied
    }
}
