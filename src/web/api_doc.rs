use utoipa::OpenApi;

use super::api::constellation::HealthResponse;
use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::constellation::get_state,
        super::api::constellation::build,
        super::api::constellation::service_health,
    ),
    components(
        schemas(
            crate::constellation::ConstellationRequest,
            crate::constellation::Constellation,
            crate::constellation::Satellite,
            crate::controller::ControllerState,
            crate::controller::Phase,
            HealthResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Constellation Builder API",
        description = "Submit constellation parameters and inspect the latest result",
        version = "0.1.0"
    ),
    tags(
        (name = "constellation", description = "Constellation submission and state")
    )
)]
pub struct ApiDoc;
