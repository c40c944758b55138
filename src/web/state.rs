use std::sync::Arc;
use tokio::sync::Mutex;

use crate::constellation::ConstellationRequest;
use crate::controller::{
    Completion, Controller, ControllerError, ControllerState, GenerationClient, Ticket,
};

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub controller: Arc<Mutex<Controller>>,
    pub client: Arc<GenerationClient>,
}

impl AppState {
    pub fn new(config: Config, client: GenerationClient) -> Self {
        let controller = Controller::new(config.defaults.clone());
        Self {
            config: Arc::new(config),
            controller: Arc::new(Mutex::new(controller)),
            client: Arc::new(client),
        }
    }

    pub async fn snapshot(&self) -> ControllerState {
        self.controller.lock().await.snapshot()
    }

    /// Accept a submission and resolve it in the background. Returns the
    /// state as of the transition to `Submitting`.
    pub async fn start_submission(
        &self,
        request: ConstellationRequest,
    ) -> Result<ControllerState, ControllerError> {
        let (ticket, snapshot) = {
            let mut controller = self.controller.lock().await;
            let ticket = controller.submit(request)?;
            (ticket, controller.snapshot())
        };

        let state = self.clone();
        tokio::spawn(async move {
            state.resolve(ticket).await;
        });

        Ok(snapshot)
    }

    /// Call the generation service for `ticket` and feed the outcome back to
    /// the controller. The lock is not held across the request.
    pub async fn resolve(&self, ticket: Ticket) -> Completion {
        let outcome = self.client.generate(&ticket.request).await;
        self.controller
            .lock()
            .await
            .complete(ticket.sequence, outcome)
    }
}
