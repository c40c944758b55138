use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{IntoResponse, Redirect},
    Form,
};

use crate::constellation::ConstellationRequest;
use crate::projection::Diagram;
use crate::view::{self, DiagramSvg};
use crate::web::api::error::{ApiError, ApiResult};
use crate::web::state::AppState;

use super::templates::IndexTemplate;

pub async fn index(State(state): State<AppState>) -> ApiResult<IndexTemplate> {
    let page = view::compose(&state.snapshot().await);
    let diagram_svg = page
        .result
        .as_ref()
        .and_then(|r| r.diagram.as_ref())
        .map(|d| DiagramSvg::new(d).render())
        .transpose()?;

    Ok(IndexTemplate { page, diagram_svg })
}

pub async fn build(
    State(state): State<AppState>,
    form: Result<Form<ConstellationRequest>, FormRejection>,
) -> Redirect {
    let request = match form {
        Ok(Form(request)) => request,
        Err(e) => {
            log::warn!("Rejecting form submission: {}", e);
            return Redirect::to("/");
        }
    };
    if let Err(e) = state.start_submission(request).await {
        log::warn!("Ignoring form submission: {}", e);
    }
    Redirect::to("/")
}

pub async fn diagram(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let snapshot = state.snapshot().await;
    let diagram = snapshot
        .constellation
        .as_ref()
        .and_then(|c| Diagram::compose(&c.satellites))
        .ok_or(ApiError::NotFound("no_diagram"))?;

    let svg = DiagramSvg::new(&diagram).render()?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
